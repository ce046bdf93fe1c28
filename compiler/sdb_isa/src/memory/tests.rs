use super::*;
use pretty_assertions::assert_eq;

fn small() -> PhysicalMemory {
    PhysicalMemory::new(MemoryConfig {
        base: 0x8000_0000,
        size: 64,
    })
}

#[test]
fn default_config_matches_board() {
    let config = MemoryConfig::default();
    assert_eq!(config.base, 0x8000_0000);
    assert_eq!(config.size, 128 * 1024 * 1024);
}

#[test]
fn write_then_read_word() {
    let mut mem = small();
    assert_eq!(mem.write_word(0x8000_0008, 0x1122_3344_5566_7788), Ok(()));
    assert_eq!(mem.translate_and_read(0x8000_0008), Ok(0x1122_3344_5566_7788));
}

#[test]
fn words_are_little_endian() {
    let mut mem = small();
    assert_eq!(mem.load(0x8000_0000, &[0x78, 0x56, 0x34, 0x12]), Ok(()));
    assert_eq!(mem.translate_and_read(0x8000_0000), Ok(0x1234_5678));
}

#[test]
fn unaligned_reads_are_allowed() {
    let mut mem = small();
    assert_eq!(mem.load(0x8000_0001, &[0xff]), Ok(()));
    assert_eq!(mem.translate_and_read(0x8000_0001), Ok(0xff));
}

#[test]
fn reads_outside_memory_fail() {
    let mem = small();
    assert_eq!(mem.translate_and_read(0), Err(OutOfRange { addr: 0 }));
    assert_eq!(
        mem.translate_and_read(0x7fff_ffff),
        Err(OutOfRange { addr: 0x7fff_ffff })
    );
    // Last full word fits, one byte further does not.
    assert!(mem.translate_and_read(0x8000_0038).is_ok());
    assert_eq!(
        mem.translate_and_read(0x8000_0039),
        Err(OutOfRange { addr: 0x8000_0039 })
    );
    assert_eq!(
        mem.translate_and_read(Word::MAX),
        Err(OutOfRange { addr: Word::MAX })
    );
}

#[test]
fn oversized_load_fails() {
    let mut mem = small();
    assert!(mem.load(0x8000_0000, &[0; 65]).is_err());
    assert_eq!(mem.size(), 64);
    assert_eq!(mem.base(), 0x8000_0000);
}
