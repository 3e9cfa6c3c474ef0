//! Fixed catalog of the indicators extracted from Antares output workbooks.
//!
//! The catalog is plain data: adding or removing an indicator only touches the
//! constants below, never the extraction, derivation or delta logic.

use std::fmt;

/// Structured identity of an Antares output column.
///
/// Antares exports multi-level headers that end up flattened as a tuple-like
/// literal such as `('LOLD', 'Hours', 'EXP')`. Headers are parsed into this
/// record and compared by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnKey<'a> {
    pub name: &'a str,
    pub unit: &'a str,
    pub kind: &'a str,
}

impl<'a> ColumnKey<'a> {
    pub const fn new(name: &'a str, unit: &'a str, kind: &'a str) -> Self {
        Self { name, unit, kind }
    }

    /// Parses a flattened header of the form `('NAME', 'UNIT', 'KIND')`.
    ///
    /// Returns `None` for any header that does not have exactly three quoted
    /// or bare components.
    pub fn parse(header: &'a str) -> Option<Self> {
        let inner = header
            .trim()
            .strip_prefix('(')?
            .strip_suffix(')')?;

        let mut parts = inner.split(',').map(unquote);
        let name = parts.next()??;
        let unit = parts.next()??;
        let kind = parts.next()??;
        if parts.next().is_some() {
            return None;
        }

        Some(Self { name, unit, kind })
    }
}

impl fmt::Display for ColumnKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "('{}', '{}', '{}')", self.name, self.unit, self.kind)
    }
}

fn unquote(part: &str) -> Option<&str> {
    let part = part.trim();
    let stripped = ['\'', '"']
        .iter()
        .find_map(|quote| part.strip_prefix(*quote)?.strip_suffix(*quote))
        .unwrap_or(part);
    if stripped.is_empty() {
        None
    } else {
        Some(stripped)
    }
}

/// Reduction applied to an indicator's time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    Sum,
    Mean,
    Max,
}

/// Display label and unit of a reported metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub unit: &'static str,
}

impl Metric {
    pub const fn new(label: &'static str, unit: &'static str) -> Self {
        Self { label, unit }
    }

    /// Key used for the metric in every table, e.g. `LOLD [h/an]`.
    pub fn key(&self) -> String {
        format!("{} [{}]", self.label, self.unit)
    }
}

/// One catalog entry: where to read the data and how to reduce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub column: ColumnKey<'static>,
    pub aggregation: Aggregation,
    pub metric: Metric,
}

impl Indicator {
    const fn new(
        column: ColumnKey<'static>,
        aggregation: Aggregation,
        label: &'static str,
        unit: &'static str,
    ) -> Self {
        Self {
            column,
            aggregation,
            metric: Metric::new(label, unit),
        }
    }
}

const fn exp(name: &'static str, unit: &'static str) -> ColumnKey<'static> {
    ColumnKey::new(name, unit, "EXP")
}

pub const LOLD: Indicator = Indicator::new(exp("LOLD", "Hours"), Aggregation::Sum, "LOLD", "h/an");
pub const LOLP: Indicator = Indicator::new(
    ColumnKey::new("LOLP", "%", "values"),
    Aggregation::Mean,
    "LOLP",
    "%",
);
pub const UNSUPPLIED_ENERGY: Indicator = Indicator::new(
    exp("UNSP. ENRG", "MWh"),
    Aggregation::Sum,
    "Energie non servie",
    "MWh",
);
pub const SPILLED_ENERGY: Indicator = Indicator::new(
    exp("SPIL. ENRG", "MWh"),
    Aggregation::Sum,
    "Spillage EnR (curtailment)",
    "MWh",
);
pub const CO2_EMISSIONS: Indicator = Indicator::new(
    exp("CO2 EMIS.", "Tons"),
    Aggregation::Sum,
    "Emissions CO2",
    "T",
);
pub const OPERATING_COST: Indicator = Indicator::new(
    exp("OP. COST", "Euro"),
    Aggregation::Sum,
    "Coût opérationnel (OPEX)",
    "€",
);
pub const MARGINAL_PRICE_MEAN: Indicator = Indicator::new(
    exp("MRG. PRICE", "Euro"),
    Aggregation::Mean,
    "Prix marginal moyen",
    "€/MWh",
);
pub const MARGINAL_PRICE_MAX: Indicator = Indicator::new(
    exp("MRG. PRICE", "Euro"),
    Aggregation::Max,
    "Prix marginal max",
    "€/MWh",
);
pub const BALANCE: Indicator = Indicator::new(
    exp("BALANCE", "MWh"),
    Aggregation::Sum,
    "Balance nette (exports>0)",
    "MWh",
);
pub const LOAD: Indicator = Indicator::new(
    exp("LOAD", "MWh"),
    Aggregation::Sum,
    "Consommation totale",
    "MWh",
);
pub const NUCLEAR: Indicator = Indicator::new(
    exp("NUCLEAR", "MWh"),
    Aggregation::Sum,
    "Production nucléaire",
    "MWh",
);
pub const GAS: Indicator =
    Indicator::new(exp("GAS", "MWh"), Aggregation::Sum, "Production gaz", "MWh");
pub const COAL: Indicator = Indicator::new(
    exp("COAL", "MWh"),
    Aggregation::Sum,
    "Production charbon",
    "MWh",
);
pub const LIGNITE: Indicator = Indicator::new(
    exp("LIGNITE", "MWh"),
    Aggregation::Sum,
    "Production lignite",
    "MWh",
);
pub const OIL: Indicator = Indicator::new(
    exp("OIL", "MWh"),
    Aggregation::Sum,
    "Production fioul",
    "MWh",
);
pub const WIND_OFFSHORE: Indicator = Indicator::new(
    exp("WIND OFFSHORE", "MWh"),
    Aggregation::Sum,
    "Eolien offshore",
    "MWh",
);
pub const WIND_ONSHORE: Indicator = Indicator::new(
    exp("WIND ONSHORE", "MWh"),
    Aggregation::Sum,
    "Eolien onshore",
    "MWh",
);
pub const SOLAR_PV: Indicator =
    Indicator::new(exp("SOLAR PV", "MWh"), Aggregation::Sum, "Solaire PV", "MWh");
pub const SOLAR_ROOFTOP: Indicator = Indicator::new(
    exp("SOLAR ROOFT", "MWh"),
    Aggregation::Sum,
    "Solaire toiture",
    "MWh",
);
pub const HYDRO_RUN_OF_RIVER: Indicator = Indicator::new(
    exp("H. ROR", "MWh"),
    Aggregation::Sum,
    "Hydraulique fil d'eau",
    "MWh",
);
pub const HYDRO_STORAGE: Indicator = Indicator::new(
    exp("H. STOR", "MWh"),
    Aggregation::Sum,
    "Hydraulique stockage",
    "MWh",
);

/// Every extracted indicator, in report order.
pub const INDICATORS: [Indicator; 21] = [
    LOLD,
    LOLP,
    UNSUPPLIED_ENERGY,
    SPILLED_ENERGY,
    CO2_EMISSIONS,
    OPERATING_COST,
    MARGINAL_PRICE_MEAN,
    MARGINAL_PRICE_MAX,
    BALANCE,
    LOAD,
    NUCLEAR,
    GAS,
    COAL,
    LIGNITE,
    OIL,
    WIND_OFFSHORE,
    WIND_ONSHORE,
    SOLAR_PV,
    SOLAR_ROOFTOP,
    HYDRO_RUN_OF_RIVER,
    HYDRO_STORAGE,
];

/// Production indicators summed into the total production.
///
/// Oil is not part of the total even though it counts towards the fossil share.
pub const PRODUCTION_SOURCES: [Indicator; 10] = [
    NUCLEAR,
    GAS,
    COAL,
    LIGNITE,
    WIND_OFFSHORE,
    WIND_ONSHORE,
    SOLAR_PV,
    SOLAR_ROOFTOP,
    HYDRO_RUN_OF_RIVER,
    HYDRO_STORAGE,
];

/// Production indicators counted as fossil.
pub const FOSSIL_SOURCES: [Indicator; 4] = [GAS, COAL, LIGNITE, OIL];

pub const TOTAL_PRODUCTION: Metric = Metric::new("Production totale", "MWh");
pub const NUCLEAR_SHARE: Metric = Metric::new("Part nucléaire", "%");
pub const FOSSIL_SHARE: Metric = Metric::new("Part fossile", "%");
pub const CO2_INTENSITY: Metric = Metric::new("Intensité CO2", "gCO2/kWh");

/// Derived metrics, in report order.
pub const DERIVED_METRICS: [Metric; 4] = [
    TOTAL_PRODUCTION,
    NUCLEAR_SHARE,
    FOSSIL_SHARE,
    CO2_INTENSITY,
];

/// Metrics kept in the "Synthèse clés" sheet.
pub const KEY_SYNTHESIS: [Metric; 12] = [
    LOLD.metric,
    UNSUPPLIED_ENERGY.metric,
    SPILLED_ENERGY.metric,
    CO2_EMISSIONS.metric,
    CO2_INTENSITY,
    OPERATING_COST.metric,
    MARGINAL_PRICE_MEAN.metric,
    BALANCE.metric,
    NUCLEAR.metric,
    GAS.metric,
    NUCLEAR_SHARE,
    FOSSIL_SHARE,
];

/// Metrics printed in the console summary.
pub const CONSOLE_SUMMARY: [Metric; 11] = [
    LOLD.metric,
    UNSUPPLIED_ENERGY.metric,
    SPILLED_ENERGY.metric,
    CO2_EMISSIONS.metric,
    OPERATING_COST.metric,
    MARGINAL_PRICE_MEAN.metric,
    BALANCE.metric,
    NUCLEAR.metric,
    GAS.metric,
    NUCLEAR_SHARE,
    CO2_INTENSITY,
];
