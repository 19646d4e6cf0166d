#![no_main]

use libfuzzer_sys::fuzz_target;
use rder::{ErrorKind, MAX_DEPTH, Tag, Writer};

// Interprets the input as a sequence of writer operations. The first octet
// determines the buffer size. The writer must never panic, must only fail
// with the error the operation calls for, and a balanced result must be
// well-formed DER.
fuzz_target!(|data: &[u8]| {
    let Some((&size, mut ops)) = data.split_first() else {
        return
    };
    let mut buf = vec![0u8; usize::from(size) * 4];
    let mut writer = Writer::new(&mut buf);

    while let Some((&op, tail)) = ops.split_first() {
        ops = tail;
        let depth = writer.depth();
        let res = match op % 9 {
            0 => writer.open(),
            1 => writer.close(),
            2 => writer.close_primitive_as(Tag::OCTET_STRING),
            3 => writer.bool(op & 0x80 != 0),
            4 => writer.null(),
            5 => {
                let mut value = [0u8; 8];
                let len = ops.len().min(8);
                value[..len].copy_from_slice(&ops[..len]);
                ops = &ops[len..];
                writer.integer(i64::from_be_bytes(value))
            }
            n => {
                let len = ops.len().min(usize::from(op >> 2));
                let (head, tail) = ops.split_at(len);
                ops = tail;
                match n {
                    6 => writer.octet_string(head),
                    7 => writer.bit_string(head),
                    _ => writer.object_identifier(head),
                }
            }
        };
        if let Err(err) = res {
            match err.kind() {
                ErrorKind::StructuralOverflow => {
                    assert_eq!(depth, MAX_DEPTH)
                }
                ErrorKind::StructuralUnderflow => assert_eq!(depth, 0),
                ErrorKind::CapacityExceeded => { }
                kind => panic!("unexpected error {:?}", kind),
            }
            return
        }
    }

    if writer.depth() == 0 {
        let res = writer.finish().unwrap();
        check_values(res);
    }
    else {
        assert!(writer.finish().is_err());
    }
});

/// Walks the encoded values and checks they are all well-formed.
fn check_values(mut data: &[u8]) {
    while let Some((&ident, tail)) = data.split_first() {
        let (&first, tail) = tail.split_first().unwrap();
        let (len, tail) = if first < 0x80 {
            (usize::from(first), tail)
        }
        else {
            let (octets, tail) = tail.split_at(usize::from(first & 0x7F));
            assert_ne!(octets[0], 0);
            let len = octets.iter().fold(0usize, |len, &octet| {
                (len << 8) | usize::from(octet)
            });
            assert!(len >= 0x80);
            (len, tail)
        };
        let (content, tail) = tail.split_at(len);
        if ident & 0x20 != 0 {
            check_values(content);
        }
        data = tail;
    }
}
