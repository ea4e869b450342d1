use std::collections::HashMap;

use crate::extract::element_model::{ElementRecord, ElementSignature};
use crate::extract::signature::{SignatureConfig, generate_signature};

/// Record positions grouped by signature, built under one `SignatureConfig`.
#[derive(Debug, Clone)]
pub struct SignatureIndex {
    config: SignatureConfig,
    buckets: HashMap<ElementSignature, Vec<usize>>,

    /// Signatures in order of first appearance in the document
    order: Vec<ElementSignature>,
}

impl SignatureIndex {
    pub fn build(records: &[ElementRecord], config: SignatureConfig) -> Self {
        let mut buckets: HashMap<ElementSignature, Vec<usize>> = HashMap::new();
        let mut order = Vec::new();

        for (pos, record) in records.iter().enumerate() {
            let signature = generate_signature(record, &config);
            match buckets.get_mut(&signature) {
                Some(positions) => positions.push(pos),
                None => {
                    order.push(signature.clone());
                    buckets.insert(signature, vec![pos]);
                }
            }
        }

        SignatureIndex {
            config,
            buckets,
            order,
        }
    }

    pub fn config(&self) -> &SignatureConfig {
        &self.config
    }

    pub fn signature_count(&self) -> usize {
        self.order.len()
    }

    /// Positions of records carrying `signature`, in document order.
    pub fn positions(&self, signature: &ElementSignature) -> &[usize] {
        self.buckets
            .get(signature)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Groups with at least `min_size` members, ordered by first appearance.
    pub fn groups(&self, min_size: usize) -> impl Iterator<Item = (&ElementSignature, &[usize])> {
        self.order.iter().filter_map(move |sig| {
            let positions = self.positions(sig);
            (positions.len() >= min_size).then_some((sig, positions))
        })
    }
}
