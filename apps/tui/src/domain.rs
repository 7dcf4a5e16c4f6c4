/// 1 m³ = 6.28981 bbl
pub const M3_TO_BBL: f64 = 6.28981;

/// Marker color for the currently selected well (`#D6A23A`).
pub const ACCENT_RGB: (u8, u8, u8) = (0xD6, 0xA2, 0x3A);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusCategory {
    Active,
    Stopped,
    Inactive,
    NotReported,
    Unknown,
}

impl StatusCategory {
    pub const ALL: [Self; 5] = [
        Self::Active,
        Self::Stopped,
        Self::Inactive,
        Self::NotReported,
        Self::Unknown,
    ];

    /// Categories shown in the map legend, in display order.
    pub const LEGEND: [Self; 4] = [
        Self::Active,
        Self::Stopped,
        Self::Inactive,
        Self::NotReported,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Activo",
            Self::Stopped => "Parado",
            Self::Inactive => "Inactivo",
            Self::NotReported => "No informado",
            Self::Unknown => "Desconocido",
        }
    }

    pub const fn hex(self) -> &'static str {
        match self {
            Self::Active => "#22C55E",
            Self::Stopped => "#FACC15",
            Self::Inactive => "#EF4444",
            Self::NotReported => "#9CA3AF",
            Self::Unknown => "#6B7280",
        }
    }

    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Active => (0x22, 0xC5, 0x5E),
            Self::Stopped => (0xFA, 0xCC, 0x15),
            Self::Inactive => (0xEF, 0x44, 0x44),
            Self::NotReported => (0x9C, 0xA3, 0xAF),
            Self::Unknown => (0x6B, 0x72, 0x80),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VolumeUnit {
    #[default]
    CubicMeters,
    Barrels,
}

impl VolumeUnit {
    pub const fn label(self) -> &'static str {
        match self {
            Self::CubicMeters => "m³",
            Self::Barrels => "BBL",
        }
    }

    pub const fn toggle(self) -> Self {
        match self {
            Self::CubicMeters => Self::Barrels,
            Self::Barrels => Self::CubicMeters,
        }
    }

    /// Converts a liquid volume given in m³. Gas volumes are never converted.
    pub fn convert(self, cubic_meters: f64) -> f64 {
        match self {
            Self::CubicMeters => cubic_meters,
            Self::Barrels => cubic_meters * M3_TO_BBL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_distinct_color() {
        let mut hexes: Vec<_> = StatusCategory::ALL.iter().map(|c| c.hex()).collect();
        hexes.sort_unstable();
        hexes.dedup();
        assert_eq!(hexes.len(), StatusCategory::ALL.len());
    }

    #[test]
    fn rgb_matches_hex() {
        for category in StatusCategory::ALL {
            let (r, g, b) = category.rgb();
            assert_eq!(category.hex(), format!("#{r:02X}{g:02X}{b:02X}"));
        }
    }

    #[test]
    fn legend_excludes_unknown() {
        assert!(!StatusCategory::LEGEND.contains(&StatusCategory::Unknown));
        assert_eq!(StatusCategory::LEGEND[0], StatusCategory::Active);
    }

    #[test]
    fn barrels_convert_liquids() {
        assert!((VolumeUnit::Barrels.convert(10.0) - 62.8981).abs() < 1e-9);
        assert!((VolumeUnit::CubicMeters.convert(10.0) - 10.0).abs() < f64::EPSILON);
        assert_eq!(VolumeUnit::CubicMeters.toggle(), VolumeUnit::Barrels);
        assert_eq!(VolumeUnit::Barrels.toggle(), VolumeUnit::CubicMeters);
    }
}
