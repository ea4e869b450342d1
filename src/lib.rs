//! Structural analysis of parsed HTML documents.
//!
//! A [`DocumentAnalyzer`](analysis::analyzer::DocumentAnalyzer) walks a
//! [`DomTree`](dom::dom_model::DomTree) once, fingerprints every element and
//! groups elements that share a signature into repeating patterns.
//!
//! ```
//! use page_patterns::analysis::analyzer::DocumentAnalyzer;
//! use page_patterns::analysis::response::ResponseMetadata;
//! use page_patterns::dom::html_source::parse_document;
//!
//! let tree = parse_document(r#"<ul><li class="row">a</li><li class="row">b</li></ul>"#);
//! let mut analyzer = DocumentAnalyzer::new("memory://doc", tree, ResponseMetadata::default());
//!
//! let patterns = analyzer.detect_patterns(2, 1.0, None);
//! assert_eq!(patterns.len(), 1);
//! assert_eq!(patterns[0].signature.tag, "li");
//! assert_eq!(patterns[0].count, 2);
//! ```

pub mod analysis;
pub mod cli;
pub mod dom;
pub mod error;
pub mod extract;
pub mod report;
pub mod trace;
