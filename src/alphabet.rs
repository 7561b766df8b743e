use crate::error::{RepeatError, Result};

/// Code of the sentinel that terminates every [`Text`].
pub const SENTINEL: u32 = 0;

/// A symbol sequence remapped onto a dense alphabet and terminated by [`SENTINEL`].
///
/// Real symbols get the codes `1..=sigma - 1` in the order of their original
/// values, so comparing codes is the same as comparing the original symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    codes: Vec<u32>,
    sigma: usize,
}

impl Text {
    pub fn from_bytes(s: &[u8]) -> Text {
        let mut enc = [0u32; 256];
        for &b in s {
            enc[b as usize] = 1;
        }
        for i in 1..256 {
            enc[i] += enc[i - 1];
        }
        let sigma = enc[255] as usize + 1;
        let codes = s
            .iter()
            .map(|&b| enc[b as usize])
            .chain(std::iter::once(SENTINEL))
            .collect();
        Text { codes, sigma }
    }

    pub fn from_symbols(s: &[u32], alphabet_size: usize) -> Result<Text> {
        let mut enc = vec![0u32; alphabet_size];
        for (position, &symbol) in s.iter().enumerate() {
            match enc.get_mut(symbol as usize) {
                Some(e) => *e = 1,
                None => {
                    return Err(RepeatError::SymbolOutOfRange {
                        symbol,
                        position,
                        alphabet_size,
                    })
                }
            }
        }
        for i in 1..enc.len() {
            enc[i] += enc[i - 1];
        }
        let sigma = enc.last().map_or(0, |&c| c as usize) + 1;
        let codes = s
            .iter()
            .map(|&x| enc[x as usize])
            .chain(std::iter::once(SENTINEL))
            .collect();
        Ok(Text { codes, sigma })
    }

    /// Number of real symbols, sentinel excluded.
    pub fn len(&self) -> usize {
        self.codes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The `len() + 1` codes, sentinel last.
    pub fn codes(&self) -> &[u32] {
        &self.codes
    }

    /// Number of distinct codes, sentinel included.
    pub fn sigma(&self) -> usize {
        self.sigma
    }

    /// Order-preserving byte view of the real symbols, if the alphabet fits in a byte.
    pub fn to_bytes(&self) -> Option<Vec<u8>> {
        if self.sigma > 257 {
            return None;
        }
        Some(self.codes[..self.len()].iter().map(|&c| (c - 1) as u8).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_are_compacted_in_order() {
        let text = Text::from_bytes(b"zaz9");
        assert_eq!(text.codes(), &[3, 2, 3, 1, 0]);
        assert_eq!(text.sigma(), 4);
        assert_eq!(text.len(), 4);
    }

    #[test]
    fn empty_text_is_only_the_sentinel() {
        let text = Text::from_bytes(b"");
        assert!(text.is_empty());
        assert_eq!(text.codes(), &[SENTINEL]);
        assert_eq!(text.sigma(), 1);
    }

    #[test]
    fn symbols_outside_the_alphabet_are_rejected() {
        let err = Text::from_symbols(&[1, 2, 10, 3], 10).unwrap_err();
        match err {
            RepeatError::SymbolOutOfRange {
                symbol,
                position,
                alphabet_size,
            } => assert_eq!((symbol, position, alphabet_size), (10, 2, 10)),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn symbols_and_bytes_agree() {
        let digits = [3u32, 1, 4, 1, 5, 9, 2, 6];
        let bytes: Vec<u8> = digits.iter().map(|&d| b'0' + d as u8).collect();
        let a = Text::from_symbols(&digits, 10).unwrap();
        let b = Text::from_bytes(&bytes);
        assert_eq!(a, b);
    }

    #[test]
    fn byte_view_preserves_order() {
        let text = Text::from_symbols(&[700, 5, 700, 42], 1000).unwrap();
        assert_eq!(text.to_bytes(), Some(vec![2, 0, 2, 1]));
        let wide: Vec<u32> = (0..300).collect();
        assert_eq!(Text::from_symbols(&wide, 300).unwrap().to_bytes(), None);
    }
}
