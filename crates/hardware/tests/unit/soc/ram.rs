//! # RAM Tests

use ls8sim_core::common::constants::MEMORY_SIZE;
use ls8sim_core::common::error::{LoadError, MemoryError};
use ls8sim_core::soc::Ram;

#[test]
fn test_ram_starts_zeroed() {
    let ram = Ram::new();
    assert_eq!(ram.len(), MEMORY_SIZE);
    assert!(ram.as_slice().iter().all(|&b| b == 0));
}

#[test]
fn test_ram_read_write_edges() {
    let mut ram = Ram::new();
    ram.write(0, 0xAB).unwrap();
    ram.write(255, 0xCD).unwrap();
    assert_eq!(ram.read(0), Ok(0xAB));
    assert_eq!(ram.read(255), Ok(0xCD));
}

#[test]
fn test_ram_out_of_bounds() {
    let mut ram = Ram::new();
    assert_eq!(ram.read(256), Err(MemoryError::OutOfBounds { address: 256 }));
    assert_eq!(
        ram.write(300, 1),
        Err(MemoryError::OutOfBounds { address: 300 })
    );
}

#[test]
fn test_ram_peek_past_end_is_zero() {
    let ram = Ram::new();
    assert_eq!(ram.peek(1000), 0);
}

#[test]
fn test_ram_load_places_image_at_zero() {
    let mut ram = Ram::new();
    ram.load(&[1, 2, 3]).unwrap();
    assert_eq!(&ram.as_slice()[..4], &[1, 2, 3, 0]);
}

#[test]
fn test_ram_load_full_image() {
    let mut ram = Ram::new();
    let image = vec![0x5A; MEMORY_SIZE];
    ram.load(&image).unwrap();
    assert_eq!(ram.read(255), Ok(0x5A));
}

#[test]
fn test_ram_load_too_large() {
    let mut ram = Ram::new();
    let image = vec![0; MEMORY_SIZE + 1];
    let err = ram.load(&image).unwrap_err();
    assert!(matches!(
        err,
        LoadError::ProgramTooLarge {
            len: 257,
            capacity: 256
        }
    ));
}
