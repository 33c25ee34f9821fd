// src/swap/word.rs
//! Word-at-a-time swapping over the 8-byte aligned middle of a buffer.

use std::ops::Range;

use super::element::Element;

/// Swap as many whole words as both buffers allow.
///
/// Returns the element range that was handled. Everything outside it is left
/// for the byte-serial path; the range is empty when the two buffers do not
/// share a word alignment.
pub(crate) fn swap_words<E: Element>(dst: &mut [E], src: &[E]) -> Range<usize> {
    let (head, _, _) = bytemuck::pod_align_to::<E, u64>(src);
    let start = head.len();
    let end = start + (src.len() - start) / E::PER_WORD * E::PER_WORD;

    let words_in = bytemuck::try_cast_slice::<E, u64>(&src[start..end]);
    let words_out = bytemuck::try_cast_slice_mut::<E, u64>(&mut dst[start..end]);

    match (words_in, words_out) {
        (Ok(words_in), Ok(words_out)) if !words_in.is_empty() => {
            for (out, word) in words_out.iter_mut().zip(words_in) {
                *out = E::swap_word(*word);
            }
            start..end
        }
        _ => 0..0,
    }
}

/// In-place variant: the buffer always shares its own alignment, so only the
/// unaligned head and the partial tail fall back to byte-serial swapping.
pub(crate) fn swap_words_in_place<E: Element>(buf: &mut [E]) -> Range<usize> {
    let (head, words, _) = bytemuck::pod_align_to_mut::<E, u64>(buf);
    let start = head.len();
    for word in words.iter_mut() {
        *word = E::swap_word(*word);
    }
    start..start + words.len() * E::PER_WORD
}
