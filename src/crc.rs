// CRC-8 over the first six bytes of an AHT2x measurement frame: polynomial
// 0x31 (x^8 + x^5 + x^4 + 1), initial value 0xFF, MSB first, no final xor.
// The result must equal the trailer byte for the frame to be accepted.
pub(crate) fn crc8(data: &[u8]) -> u8 {
    let mut crc: u8 = 0xFF;
    for &byte in data {
        crc ^= byte;
        for _ in 0..8 {
            crc = if crc & 0x80 != 0 {
                (crc << 1) ^ 0x31
            } else {
                crc << 1
            };
        }
    }
    crc
}

#[cfg(test)]
mod tests {
    use super::crc8;

    #[test]
    fn known_vector() {
        assert_eq!(crc8(&[0xBE, 0xEF]), 0x92);
    }

    #[test]
    fn empty_input_is_initial_value() {
        assert_eq!(crc8(&[]), 0xFF);
    }

    /// Flipping any single bit of a six-byte frame must change the checksum.
    #[test]
    fn sensitive_to_every_bit() {
        let frame = [0x1C, 0x65, 0xB4, 0x25, 0xCD, 0x26];
        let reference = crc8(&frame);
        for byte in 0..frame.len() {
            for bit in 0..8 {
                let mut corrupted = frame;
                corrupted[byte] ^= 1 << bit;
                assert_ne!(
                    crc8(&corrupted),
                    reference,
                    "flip of byte {byte} bit {bit} went undetected"
                );
            }
        }
    }
}
