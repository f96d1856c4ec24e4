use blake3::Hasher;

use crate::data::InputFeatures;

/// Computes a 64-bit hash of the input data using BLAKE3, truncated from 256 bits.
///
/// Used for deterministic stub token ids, where a rare collision only merges two words.
#[inline]
pub fn hash_to_u64(data: &[u8]) -> u64 {
    let hash = blake3::hash(data);
    let bytes: [u8; 8] = hash.as_bytes()[0..8]
        .try_into()
        .expect("BLAKE3 always produces at least 8 bytes");
    u64::from_le_bytes(bytes)
}

/// BLAKE3 digest over a canonical little-endian layout of `features`.
///
/// Two conversions produced bit-identical records exactly when their fingerprints match.
/// Order matters: the same records in a different order hash differently.
pub fn fingerprint_features(features: &[InputFeatures]) -> [u8; 32] {
    let mut hasher = Hasher::new();
    hasher.update(&(features.len() as u64).to_le_bytes());

    for feature in features {
        update_bytes(&mut hasher, feature.example_id().as_bytes());
        update_matrix(&mut hasher, Some(feature.input_ids()));
        update_matrix(&mut hasher, feature.attention_mask());
        update_matrix(&mut hasher, feature.token_type_ids());
        match feature.label() {
            Some(label) => {
                hasher.update(&[1]);
                hasher.update(&(label as u64).to_le_bytes());
            }
            None => {
                hasher.update(&[0]);
            }
        }
    }

    *hasher.finalize().as_bytes()
}

/// Hex form of [`fingerprint_features`], for logs.
pub fn fingerprint_hex(features: &[InputFeatures]) -> String {
    blake3::Hash::from_bytes(fingerprint_features(features))
        .to_hex()
        .to_string()
}

fn update_bytes(hasher: &mut Hasher, bytes: &[u8]) {
    hasher.update(&(bytes.len() as u64).to_le_bytes());
    hasher.update(bytes);
}

fn update_matrix(hasher: &mut Hasher, matrix: Option<&[Vec<u32>]>) {
    let Some(rows) = matrix else {
        hasher.update(&[0]);
        return;
    };

    hasher.update(&[1]);
    hasher.update(&(rows.len() as u64).to_le_bytes());
    for row in rows {
        hasher.update(&(row.len() as u64).to_le_bytes());
        for value in row {
            hasher.update(&value.to_le_bytes());
        }
    }
}
