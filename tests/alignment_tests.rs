// tests/alignment_tests.rs
use memswap::swap::{swap_ints, swap_longs, swap_shorts, Element};

const ALIGNMENT: usize = 8;

/// Backing storage whose first byte sits on an 8-byte boundary
fn aligned_storage(elements: usize, width: usize) -> Vec<u64> {
    vec![0u64; (elements * width + ALIGNMENT) / 8 + 1]
}

/// Swap `src_elems` at every combination of source and destination
/// misalignment and compare against `expected`.
fn swap_align_test<E: Element + PartialEq + std::fmt::Debug>(
    swap_func: fn(&mut [E], &[E]),
    src_elems: &[E],
    expected: &[E],
) {
    let width = std::mem::size_of::<E>();
    let byte_len = src_elems.len() * width;
    let mut dst_storage = aligned_storage(src_elems.len(), width);
    let mut src_storage = aligned_storage(src_elems.len(), width);

    for dst_align in 0..ALIGNMENT {
        for src_align in 0..ALIGNMENT {
            let dst_bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut dst_storage);
            let dst_bytes = &mut dst_bytes[dst_align..dst_align + byte_len];
            dst_bytes.fill(0);

            let src_bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut src_storage);
            let src_bytes = &mut src_bytes[src_align..src_align + byte_len];
            src_bytes.copy_from_slice(bytemuck::cast_slice(src_elems));

            let dst: &mut [E] = bytemuck::cast_slice_mut(dst_bytes);
            let src: &[E] = bytemuck::cast_slice(src_bytes);
            swap_func(dst, src);

            assert_eq!(
                dst, expected,
                "Failed at dst align {} src align {}",
                dst_align, src_align
            );
        }
    }
}

/// Element `i` holds bytes `step*i, step*(i+1), ...`; the expected output
/// holds the same bytes reversed.
fn ramp<const N: usize>(count: usize) -> (Vec<[u8; N]>, Vec<[u8; N]>) {
    let mut src = Vec::with_capacity(count);
    let mut expected = Vec::with_capacity(count);
    for i in 0..count {
        let mut element = [0u8; N];
        for (j, byte) in element.iter_mut().enumerate() {
            *byte = (N * (i + j)) as u8;
        }
        let mut reversed = element;
        reversed.reverse();
        src.push(element);
        expected.push(reversed);
    }
    (src, expected)
}

#[test]
fn test_swap_shorts_align() {
    // An odd count leaves a trailing short outside any word.
    let (src, expected) = ramp::<2>(9);
    swap_align_test(swap_shorts, &src, &expected);
}

#[test]
fn test_swap_ints_align() {
    let (src, expected) = ramp::<4>(10);
    swap_align_test(swap_ints, &src, &expected);
}

#[test]
fn test_swap_longs_align() {
    let (src, expected) = ramp::<8>(10);
    swap_align_test(swap_longs, &src, &expected);
}

#[test]
fn test_swap_odd_tails() {
    for count in [1, 3, 5, 7, 13] {
        let (src, expected) = ramp::<2>(count);
        swap_align_test(swap_shorts, &src, &expected);

        let (src, expected) = ramp::<4>(count);
        swap_align_test(swap_ints, &src, &expected);

        let (src, expected) = ramp::<8>(count);
        swap_align_test(swap_longs, &src, &expected);
    }
}

#[test]
fn test_in_place_align() {
    use memswap::swap::{swap_ints_in_place, swap_longs_in_place, swap_shorts_in_place};

    let (src, expected) = ramp::<2>(17);
    let (src4, expected4) = ramp::<4>(11);
    let (src8, expected8) = ramp::<8>(5);

    for offset in 0..ALIGNMENT {
        let mut storage = aligned_storage(17, 2);
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut storage);
        let buf = &mut bytes[offset..offset + 34];
        buf.copy_from_slice(bytemuck::cast_slice(&src));
        swap_shorts_in_place(bytemuck::cast_slice_mut(&mut *buf));
        assert_eq!(buf, bytemuck::cast_slice::<[u8; 2], u8>(&expected), "offset {}", offset);

        let mut storage = aligned_storage(11, 4);
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut storage);
        let buf = &mut bytes[offset..offset + 44];
        buf.copy_from_slice(bytemuck::cast_slice(&src4));
        swap_ints_in_place(bytemuck::cast_slice_mut(&mut *buf));
        assert_eq!(buf, bytemuck::cast_slice::<[u8; 4], u8>(&expected4), "offset {}", offset);

        let mut storage = aligned_storage(5, 8);
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut storage);
        let buf = &mut bytes[offset..offset + 40];
        buf.copy_from_slice(bytemuck::cast_slice(&src8));
        swap_longs_in_place(bytemuck::cast_slice_mut(&mut *buf));
        assert_eq!(buf, bytemuck::cast_slice::<[u8; 8], u8>(&expected8), "offset {}", offset);
    }
}
