//! Shaping of production data for the curve and bar charts.

use crate::api::models::{Company, ProductionAggregates, ProductionMonthly};
use crate::domain::VolumeUnit;

/// First year offered by the production date filters.
pub const FIRST_YEAR: i32 = 2013;

pub const MONTHS: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Series {
    Oil,
    Gas,
    Water,
}

impl Series {
    pub const ALL: [Self; 3] = [Self::Oil, Self::Gas, Self::Water];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Oil => "Petróleo",
            Self::Gas => "Gas",
            Self::Water => "Agua",
        }
    }

    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Oil => (0x3F, 0x6B, 0x4F),
            Self::Gas => (0xD9, 0x7A, 0x00),
            Self::Water => (0x3A, 0x7C, 0xA5),
        }
    }

    /// Gas is always reported in thousands of m³.
    pub const fn unit_label(self, unit: VolumeUnit) -> &'static str {
        match self {
            Self::Gas => "Mm³",
            Self::Oil | Self::Water => unit.label(),
        }
    }

    pub fn legend(self, unit: VolumeUnit) -> String {
        format!("{} ({})", self.label(), self.unit_label(unit))
    }

    pub fn convert(self, unit: VolumeUnit, value: f64) -> f64 {
        match self {
            Self::Gas => value,
            Self::Oil | Self::Water => unit.convert(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurvePoint {
    pub date: String,
    pub oil: Option<f64>,
    pub gas: Option<f64>,
    pub water: Option<f64>,
}

impl CurvePoint {
    pub const fn value(&self, series: Series) -> Option<f64> {
        match series {
            Series::Oil => self.oil,
            Series::Gas => self.gas,
            Series::Water => self.water,
        }
    }
}

/// Converts liquids to the requested unit; gas and missing values pass
/// through untouched.
pub fn convert_curve(rows: &[ProductionMonthly], unit: VolumeUnit) -> Vec<CurvePoint> {
    rows.iter()
        .map(|row| CurvePoint {
            date: row.date.clone(),
            oil: row.oil.map(|v| Series::Oil.convert(unit, v)),
            gas: row.gas,
            water: row.water.map(|v| Series::Water.convert(unit, v)),
        })
        .collect()
}

/// Chart-ready `(index, value)` pairs for one series, skipping gaps.
#[allow(clippy::cast_precision_loss)]
pub fn series_points(points: &[CurvePoint], series: Series) -> Vec<(f64, f64)> {
    points
        .iter()
        .enumerate()
        .filter_map(|(index, point)| point.value(series).map(|v| (index as f64, v)))
        .collect()
}

/// Largest value across all series, or zero for an empty curve.
pub fn curve_max(points: &[CurvePoint]) -> f64 {
    points
        .iter()
        .flat_map(|point| Series::ALL.iter().filter_map(|s| point.value(*s)))
        .fold(0.0_f64, f64::max)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stat {
    Total,
    Average,
}

impl Stat {
    pub const fn title(self) -> &'static str {
        match self {
            Self::Total => "Producción Total",
            Self::Average => "Producción Promedio",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductionBar {
    pub series: Series,
    pub value: f64,
}

/// Bars for petróleo, gas and agua, in that order.
pub fn production_bars(
    aggregates: &ProductionAggregates,
    unit: VolumeUnit,
    stat: Stat,
) -> [ProductionBar; 3] {
    let pick = |total: f64, avg: f64| match stat {
        Stat::Total => total,
        Stat::Average => avg,
    };

    [
        ProductionBar {
            series: Series::Oil,
            value: Series::Oil.convert(unit, pick(aggregates.oil.total, aggregates.oil.avg)),
        },
        ProductionBar {
            series: Series::Gas,
            value: pick(aggregates.gas.total, aggregates.gas.avg),
        },
        ProductionBar {
            series: Series::Water,
            value: Series::Water.convert(unit, pick(aggregates.water.total, aggregates.water.avg)),
        },
    ]
}

/// Compact axis labels: `1.5M`, `2.3K`, `12`.
pub fn format_axis_value(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format!("{value:.0}")
    }
}

/// Argentine number formatting: `.` groups thousands, `,` separates
/// decimals, at most two fraction digits.
pub fn format_es_ar(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let is_zero = integer.chars().all(|c| c == '0') && fraction.is_empty();
    let sign = if value.is_sign_negative() && !is_zero { "-" } else { "" };

    if fraction.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped},{fraction}")
    }
}

/// Years offered by the date filters, oldest first.
pub fn year_options(current_year: i32) -> Vec<i32> {
    (FIRST_YEAR..=current_year).collect()
}

pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTHS.get(index).copied()
}

pub fn company_name(company: &Company) -> &str {
    company
        .empresa
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or("(Sin nombre de empresa)")
}

pub fn company_label(company: &Company) -> String {
    format!("{} ({} pozos)", company_name(company), company.cantidad_pozos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::ProductionStat;

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(diff < 1e-9, "expected {expected}, got {actual}, diff {diff}");
    }

    fn rows() -> Vec<ProductionMonthly> {
        vec![
            ProductionMonthly {
                date: "2022-01".to_string(),
                oil: Some(100.0),
                gas: Some(50.0),
                water: Some(10.0),
            },
            ProductionMonthly {
                date: "2022-02".to_string(),
                oil: None,
                gas: Some(40.0),
                water: Some(20.0),
            },
        ]
    }

    #[test]
    fn cubic_meters_leave_curve_untouched() {
        let points = convert_curve(&rows(), VolumeUnit::CubicMeters);
        assert_eq!(points[0].oil, Some(100.0));
        assert_eq!(points[0].water, Some(10.0));
        assert_eq!(points[1].oil, None);
    }

    #[test]
    fn barrels_convert_oil_and_water_but_not_gas() {
        let points = convert_curve(&rows(), VolumeUnit::Barrels);
        assert_close(points[0].oil.unwrap_or_default(), 628.981);
        assert_close(points[0].water.unwrap_or_default(), 62.8981);
        assert_eq!(points[0].gas, Some(50.0));
        assert_eq!(points[1].oil, None);
    }

    #[test]
    fn series_points_skip_gaps() {
        let points = convert_curve(&rows(), VolumeUnit::CubicMeters);
        assert_eq!(series_points(&points, Series::Oil), vec![(0.0, 100.0)]);
        assert_eq!(
            series_points(&points, Series::Gas),
            vec![(0.0, 50.0), (1.0, 40.0)]
        );
        assert_close(curve_max(&points), 100.0);
        assert_close(curve_max(&[]), 0.0);
    }

    #[test]
    fn bars_pick_stat_and_convert_liquids() {
        let aggregates = ProductionAggregates {
            oil: ProductionStat { total: 1000.0, avg: 10.0 },
            water: ProductionStat { total: 500.0, avg: 5.0 },
            gas: ProductionStat { total: 300.0, avg: 3.0 },
        };

        let totals = production_bars(&aggregates, VolumeUnit::CubicMeters, Stat::Total);
        assert_eq!(totals[0].series, Series::Oil);
        assert_close(totals[0].value, 1000.0);
        assert_close(totals[1].value, 300.0);
        assert_close(totals[2].value, 500.0);

        let averages = production_bars(&aggregates, VolumeUnit::Barrels, Stat::Average);
        assert_close(averages[0].value, 62.8981);
        assert_close(averages[1].value, 3.0);
        assert_close(averages[2].value, 31.44905);
    }

    #[test]
    fn axis_values_are_compact() {
        assert_eq!(format_axis_value(1_500_000.0), "1.5M");
        assert_eq!(format_axis_value(2_340.0), "2.3K");
        assert_eq!(format_axis_value(999.0), "999");
        assert_eq!(format_axis_value(12.4), "12");
    }

    #[test]
    fn es_ar_formatting() {
        assert_eq!(format_es_ar(1_234_567.891), "1.234.567,89");
        assert_eq!(format_es_ar(1500.0), "1.500");
        assert_eq!(format_es_ar(0.5), "0,5");
        assert_eq!(format_es_ar(999.999), "1.000");
        assert_eq!(format_es_ar(-2500.25), "-2.500,25");
        assert_eq!(format_es_ar(-0.001), "0");
        assert_eq!(format_es_ar(0.0), "0");
    }

    #[test]
    fn series_labels_follow_unit() {
        assert_eq!(Series::Oil.legend(VolumeUnit::Barrels), "Petróleo (BBL)");
        assert_eq!(Series::Gas.legend(VolumeUnit::Barrels), "Gas (Mm³)");
        assert_eq!(Series::Water.legend(VolumeUnit::CubicMeters), "Agua (m³)");
    }

    #[test]
    fn years_start_in_2013() {
        let years = year_options(2016);
        assert_eq!(years, vec![2013, 2014, 2015, 2016]);
        assert!(year_options(2000).is_empty());
    }

    #[test]
    fn month_names_are_one_based() {
        assert_eq!(month_name(1), Some("Enero"));
        assert_eq!(month_name(12), Some("Diciembre"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }

    #[test]
    fn nameless_company_gets_placeholder() {
        let company = Company {
            empresa: Some("   ".to_string()),
            cantidad_pozos: 4,
        };
        assert_eq!(company_label(&company), "(Sin nombre de empresa) (4 pozos)");

        let named = Company {
            empresa: Some("Tecpetrol".to_string()),
            cantidad_pozos: 12,
        };
        assert_eq!(company_label(&named), "Tecpetrol (12 pozos)");
    }
}
