/// Метка "здорового" листа, возвращаемая моделью
pub const HEALTHY_LABEL: &str = "healthy";

/// Болезни чайного листа, которые распознаёт модель
///
/// Unknown labels are kept verbatim in `Other` so a retrained model
/// does not break the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DiseaseLabel {
    BlisterBlight,
    GrayBlight,
    BrownBlight,
    RedRust,
    Healthy,
    Other(String),
}

impl DiseaseLabel {
    /// Код метки в том виде, в котором его отдаёт модель
    pub fn code(&self) -> &str {
        match self {
            DiseaseLabel::BlisterBlight => "blister_blight",
            DiseaseLabel::GrayBlight => "gray_blight",
            DiseaseLabel::BrownBlight => "brown_blight",
            DiseaseLabel::RedRust => "red_rust",
            DiseaseLabel::Healthy => HEALTHY_LABEL,
            DiseaseLabel::Other(code) => code.as_str(),
        }
    }

    /// Парсинг из строки. Exact match only, the sentinel is case-sensitive.
    pub fn from_code(code: &str) -> Self {
        match code {
            "blister_blight" => DiseaseLabel::BlisterBlight,
            "gray_blight" => DiseaseLabel::GrayBlight,
            "brown_blight" => DiseaseLabel::BrownBlight,
            "red_rust" => DiseaseLabel::RedRust,
            HEALTHY_LABEL => DiseaseLabel::Healthy,
            other => DiseaseLabel::Other(other.to_string()),
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, DiseaseLabel::Healthy)
    }

    pub fn variant(&self) -> ResultVariant {
        if self.is_healthy() {
            ResultVariant::Healthy
        } else {
            ResultVariant::Disease
        }
    }
}

/// Вариант оформления панели результата
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultVariant {
    Healthy,
    Disease,
}

impl ResultVariant {
    /// CSS modifier for the diagnosis header
    pub fn css_modifier(&self) -> &'static str {
        match self {
            ResultVariant::Healthy => "healthy",
            ResultVariant::Disease => "disease",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_round_trip() {
        let known = [
            DiseaseLabel::BlisterBlight,
            DiseaseLabel::GrayBlight,
            DiseaseLabel::BrownBlight,
            DiseaseLabel::RedRust,
            DiseaseLabel::Healthy,
        ];
        for label in known {
            assert_eq!(DiseaseLabel::from_code(label.code()), label);
        }
    }

    #[test]
    fn test_unknown_code_is_kept() {
        let label = DiseaseLabel::from_code("leaf_spot");
        assert_eq!(label, DiseaseLabel::Other("leaf_spot".to_string()));
        assert_eq!(label.code(), "leaf_spot");
    }

    #[test]
    fn test_variant_from_sentinel() {
        assert_eq!(DiseaseLabel::from_code("healthy").variant(), ResultVariant::Healthy);
        assert_eq!(DiseaseLabel::from_code("red_rust").variant(), ResultVariant::Disease);
        assert_eq!(DiseaseLabel::from_code("blight").variant(), ResultVariant::Disease);
        // Sentinel comparison is exact
        assert_eq!(DiseaseLabel::from_code("Healthy").variant(), ResultVariant::Disease);
    }

    #[test]
    fn test_css_modifier_per_variant() {
        assert_eq!(ResultVariant::Healthy.css_modifier(), "healthy");
        assert_eq!(ResultVariant::Disease.css_modifier(), "disease");
        assert_eq!(
            DiseaseLabel::from_code(HEALTHY_LABEL).variant().css_modifier(),
            "healthy"
        );
        assert_eq!(
            DiseaseLabel::from_code("brown_blight").variant().css_modifier(),
            "disease"
        );
    }
}
