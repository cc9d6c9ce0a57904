// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Blake2_128, Hasher, Twox64};

/// Digest of the input followed by the input itself.
///
/// Keeping the raw input in the output lets a storage key be read back while iterating a map.
/// Every instance owns its buffer, so two hashers never share written data.
#[derive(Debug, Clone, Default)]
pub struct Concat<H> {
    inner: H,
    data: Vec<u8>,
}

#[allow(non_camel_case_types)]
pub type Blake2_128Concat = Concat<Blake2_128>;
pub type Twox64Concat = Concat<Twox64>;

impl<H: Hasher> Concat<H> {
    pub fn new(inner: H) -> Self {
        Self {
            inner,
            data: Vec::new(),
        }
    }

    /// Split a concat output into digest and original input.
    pub fn split<'a>(&self, output: &'a [u8]) -> Option<(&'a [u8], &'a [u8])> {
        let len = self.inner.digest_len();
        (output.len() >= len).then(|| output.split_at(len))
    }
}

impl<H: Hasher> Hasher for Concat<H> {
    fn write(&mut self, bytes: &[u8]) {
        self.inner.write(bytes);
        self.data.extend_from_slice(bytes);
    }

    fn reset(&mut self) {
        self.inner.reset();
        self.data.clear();
    }

    fn finish(&self) -> Vec<u8> {
        let mut out = self.inner.finish();
        out.extend_from_slice(&self.data);
        out
    }

    fn digest_len(&self) -> usize {
        self.inner.digest_len()
    }
}
