// tests/mmap_tests.rs
use memswap::{ByteOrder, ElementWidth, MappedFile, MemoryError};
use std::io::Write;
use tempfile::NamedTempFile;

fn temp_file_with(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_read_big_endian_file() {
    let file = temp_file_with(&[0x00, 0x00, 0x00, 0x2A, 0x00, 0x00, 0x01, 0x00]);
    let mapped = MappedFile::open(file.path(), ByteOrder::Big).unwrap();

    assert_eq!(mapped.len(), 8);
    assert!(!mapped.is_empty());
    assert_eq!(mapped.order(), ByteOrder::Big);
    assert_eq!(mapped.as_bytes()[3], 0x2A);
    assert_eq!(mapped.get::<i32>(0).unwrap(), 42);

    let mut values = [0i32; 2];
    mapped.get_array(0, &mut values).unwrap();
    assert_eq!(values, [42, 256]);
}

#[test]
fn test_swap_in_place_persists() {
    let file = temp_file_with(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);

    {
        let mut mapped = MappedFile::open(file.path(), ByteOrder::Little).unwrap();
        mapped.swap_in_place(ElementWidth::Four, 1..9).unwrap();
        mapped.flush().unwrap();
    }

    let contents = std::fs::read(file.path()).unwrap();
    assert_eq!(contents, vec![1, 5, 4, 3, 2, 9, 8, 7, 6]);
}

#[test]
fn test_put_array_roundtrip() {
    let file = temp_file_with(&[0u8; 20]);
    let values = [1.25f64, -8.5];

    {
        let mut mapped = MappedFile::open(file.path(), ByteOrder::Big).unwrap();
        mapped.put_array(3, &values).unwrap();
        mapped.put(19, 0x7Fu8).unwrap();
        mapped.flush().unwrap();
    }

    let contents = std::fs::read(file.path()).unwrap();
    assert_eq!(&contents[3..11], &1.25f64.to_be_bytes());
    assert_eq!(contents[19], 0x7F);

    let mapped = MappedFile::open(file.path(), ByteOrder::Big).unwrap();
    let mut back = [0f64; 2];
    mapped.get_array(3, &mut back).unwrap();
    assert_eq!(back, values);
}

#[test]
fn test_mapped_bounds() {
    let file = temp_file_with(&[0u8; 6]);
    let mut mapped = MappedFile::open(file.path(), ByteOrder::Little).unwrap();

    assert!(matches!(mapped.get::<u64>(0), Err(MemoryError::OutOfBounds { .. })));
    assert!(mapped.swap_in_place(ElementWidth::Two, 4..8).is_err());
    assert!(mapped.swap_in_place(ElementWidth::Four, 0..6).is_err());
}

#[test]
#[allow(clippy::reversed_empty_ranges)]
fn test_reversed_range_is_rejected() {
    let file = temp_file_with(&[1, 2, 3, 4, 5, 6, 7, 8]);
    let mut mapped = MappedFile::open(file.path(), ByteOrder::Little).unwrap();

    let result = mapped.swap_in_place(ElementWidth::Two, 6..2);
    assert!(matches!(
        result,
        Err(MemoryError::OutOfBounds { offset: 6, len: 0, capacity: 8 })
    ));
    assert_eq!(mapped.as_bytes(), &[1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = MappedFile::open(dir.path().join("absent.bin"), ByteOrder::Big);
    assert!(matches!(result, Err(MemoryError::Io(_))));
}
