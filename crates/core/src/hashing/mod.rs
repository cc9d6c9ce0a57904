// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Hash constructions used for storage keys.
//!
//! The primitives buffer written bytes and hash them with `sp_crypto_hashing` on
//! [`Hasher::finish`]. [`Concat`] wraps any of them and appends the raw input to the digest.

mod concat;

pub use concat::{Blake2_128Concat, Concat, Twox64Concat};

/// Incremental hashing capability.
pub trait Hasher {
    /// Feed more input.
    fn write(&mut self, bytes: &[u8]);

    /// Forget all input written so far.
    fn reset(&mut self);

    /// Output for the input written so far. Does not reset.
    fn finish(&self) -> Vec<u8>;

    /// Length of the digest part of the output.
    fn digest_len(&self) -> usize;

    /// Hash `bytes` from a clean state.
    fn hash(&mut self, bytes: &[u8]) -> Vec<u8> {
        self.reset();
        self.write(bytes);
        let out = self.finish();
        self.reset();
        out
    }
}

impl<H: Hasher + ?Sized> Hasher for Box<H> {
    fn write(&mut self, bytes: &[u8]) {
        (**self).write(bytes)
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn finish(&self) -> Vec<u8> {
        (**self).finish()
    }

    fn digest_len(&self) -> usize {
        (**self).digest_len()
    }
}

macro_rules! buffered_hasher {
    ($(#[$doc:meta])* $name:ident, $len:literal, $func:path) => {
        $(#[$doc])*
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            buffer: Vec<u8>,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }
        }

        impl Hasher for $name {
            fn write(&mut self, bytes: &[u8]) {
                self.buffer.extend_from_slice(bytes);
            }

            fn reset(&mut self) {
                self.buffer.clear();
            }

            fn finish(&self) -> Vec<u8> {
                $func(&self.buffer).to_vec()
            }

            fn digest_len(&self) -> usize {
                $len
            }
        }
    };
}

buffered_hasher!(
    /// 128-bit Blake2b.
    Blake2_128,
    16,
    sp_crypto_hashing::blake2_128
);
buffered_hasher!(
    /// 256-bit Blake2b.
    Blake2_256,
    32,
    sp_crypto_hashing::blake2_256
);
buffered_hasher!(
    /// 64-bit xxHash.
    Twox64,
    8,
    sp_crypto_hashing::twox_64
);
buffered_hasher!(
    /// 128-bit xxHash, two 64-bit xxHash rounds with seeds 0 and 1.
    Twox128,
    16,
    sp_crypto_hashing::twox_128
);
buffered_hasher!(Twox256, 32, sp_crypto_hashing::twox_256);
