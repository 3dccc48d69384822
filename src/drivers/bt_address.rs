use std::fmt;
use std::str::FromStr;

use crate::drivers::GsrError;

const ADDRESS_TEXT_LEN: usize = 17;

/// Six-byte Bluetooth hardware address of a sensor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BtAddress([u8; 6]);

impl BtAddress {
    pub fn new(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }
    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }
}

/// Parses the `xx:xx:xx:xx:xx:xx` form shown by Android's Bluetooth stack.
impl FromStr for BtAddress {
    type Err = GsrError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GsrError::InvalidAddress(s.to_string());
        if s.len() != ADDRESS_TEXT_LEN {
            return Err(invalid());
        }
        let tokens: Vec<&str> = s.split(':').collect();
        if tokens.len() != 6 {
            return Err(invalid());
        }
        let mut bytes = [0u8; 6];
        for (byte, token) in bytes.iter_mut().zip(&tokens) {
            if token.len() != 2 || !token.bytes().all(|c| c.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            *byte = u8::from_str_radix(token, 16).map_err(|_| invalid())?;
        }
        Ok(BtAddress(bytes))
    }
}

impl fmt::Display for BtAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.0;
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            b[0], b[1], b[2], b[3], b[4], b[5]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn parses_mixed_case() {
        let addr: BtAddress = "00:06:66:aB:Cd:EF".parse().unwrap();
        assert_eq!(addr.as_bytes(), &[0x00, 0x06, 0x66, 0xAB, 0xCD, 0xEF]);
    }
    #[test]
    fn displays_upper_case() {
        let addr = BtAddress::new([0x00, 0x06, 0x66, 0x43, 0xa8, 0x1f]);
        assert_eq!(addr.to_string(), "00:06:66:43:A8:1F");
    }
    #[test]
    fn rejects_wrong_length() {
        assert!("00:06:66:43:A8".parse::<BtAddress>().is_err());
        assert!("00:06:66:43:A8:1F:00".parse::<BtAddress>().is_err());
        assert!("".parse::<BtAddress>().is_err());
    }
    #[test]
    fn rejects_wrong_separators() {
        assert!("00-06-66-43-A8-1F".parse::<BtAddress>().is_err());
        // right length and token count, uneven widths
        assert!("000:6:66:43:A8:1F".parse::<BtAddress>().is_err());
        assert!("0006:66:43:A8:1F:".parse::<BtAddress>().is_err());
    }
    #[test]
    fn rejects_non_hex() {
        let err = "00:06:66:GG:A8:1F".parse::<BtAddress>().unwrap_err();
        assert!(matches!(err, GsrError::InvalidAddress(s) if s == "00:06:66:GG:A8:1F"));
        assert!("+0:06:66:43:A8:1F".parse::<BtAddress>().is_err());
    }
}
