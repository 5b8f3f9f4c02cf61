//! Size and padding tokens

crate::lenient_id! {
    /// Max-width constraint of a surface
    pub enum SizeId {
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
        Full => "full",
    }
    default = Md;
}

impl SizeId {
    /// Max width in logical pixels (`None` is unbounded)
    pub fn max_width(self) -> Option<f32> {
        match self {
            SizeId::Sm => Some(384.0),
            SizeId::Md => Some(512.0),
            SizeId::Lg => Some(672.0),
            SizeId::Xl => Some(896.0),
            SizeId::Full => None,
        }
    }
}

crate::lenient_id! {
    /// Inner padding of a surface
    pub enum PaddingId {
        None => "none",
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
    }
    default = Md;
}

impl PaddingId {
    /// Uniform padding in logical pixels
    pub fn padding(self) -> f32 {
        match self {
            PaddingId::None => 0.0,
            PaddingId::Sm => 12.0,
            PaddingId::Md => 16.0,
            PaddingId::Lg => 24.0,
            PaddingId::Xl => 32.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_table() {
        let widths: Vec<Option<f32>> = SizeId::ALL.iter().map(|s| s.max_width()).collect();
        assert_eq!(
            widths,
            vec![Some(384.0), Some(512.0), Some(672.0), Some(896.0), None]
        );
        assert_eq!(SizeId::from_id("gigantic"), SizeId::Md);
    }

    #[test]
    fn test_padding_table() {
        assert_eq!(PaddingId::from_id("none").padding(), 0.0);
        assert_eq!(PaddingId::from_id("LG").padding(), 24.0);
        assert_eq!(PaddingId::from_id("").padding(), 16.0);
    }

    #[test]
    fn test_ids_serialize_as_strings() {
        assert_eq!(serde_json::to_string(&PaddingId::Xl).unwrap(), "\"xl\"");
        let size: SizeId = serde_json::from_str("\"full\"").unwrap();
        assert_eq!(size, SizeId::Full);
    }
}
