//! Approximate planetary elements (J2000 epoch, heliocentric ecliptic).
//! Source: JPL "Keplerian Elements for Approximate Positions of the Major
//! Planets" (Standish), Tables 1, 2a and 2b.

use super::elements::{ElementSet, MeanAnomalyTerms, OrbitalElements};

/// Identifier for the bodies in the built-in tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlanetId {
    Mercury,
    Venus,
    /// Earth-Moon barycenter
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl PlanetId {
    /// The eight planets, in table order.
    pub const PLANETS: &'static [PlanetId] = &[
        PlanetId::Mercury,
        PlanetId::Venus,
        PlanetId::Earth,
        PlanetId::Mars,
        PlanetId::Jupiter,
        PlanetId::Saturn,
        PlanetId::Uranus,
        PlanetId::Neptune,
    ];

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            PlanetId::Mercury => "Mercury",
            PlanetId::Venus => "Venus",
            PlanetId::Earth => "Earth",
            PlanetId::Mars => "Mars",
            PlanetId::Jupiter => "Jupiter",
            PlanetId::Saturn => "Saturn",
            PlanetId::Uranus => "Uranus",
            PlanetId::Neptune => "Neptune",
            PlanetId::Pluto => "Pluto",
        }
    }

    /// Mass in solar masses (Earth includes the Moon).
    pub fn mass_solar(&self) -> f64 {
        match self {
            PlanetId::Mercury => 1.6601e-7,
            PlanetId::Venus => 2.4478e-6,
            PlanetId::Earth => 3.0404e-6,
            PlanetId::Mars => 3.2272e-7,
            PlanetId::Jupiter => 9.5479e-4,
            PlanetId::Saturn => 2.8589e-4,
            PlanetId::Uranus => 4.3662e-5,
            PlanetId::Neptune => 5.1514e-5,
            PlanetId::Pluto => 7.396e-9,
        }
    }
}

/// (id, base, rate) rows; element order a, e, I, L, ϖ, Ω
type TableRow = (PlanetId, ElementSet, ElementSet);

/// Table 1, valid 1800 AD - 2050 AD.
const TABLE_1800_2050: [TableRow; 8] = [
    (
        PlanetId::Mercury,
        ElementSet::new(0.38709927, 0.20563593, 7.00497902, 252.25032350, 77.45779628, 48.33076593),
        ElementSet::new(0.00000037, 0.00001906, -0.00594749, 149472.67411175, 0.16047689, -0.12534081),
    ),
    (
        PlanetId::Venus,
        ElementSet::new(0.72333566, 0.00677672, 3.39467605, 181.97909950, 131.60246718, 76.67984255),
        ElementSet::new(0.00000390, -0.00004107, -0.00078890, 58517.81538729, 0.00268329, -0.27769418),
    ),
    (
        PlanetId::Earth,
        ElementSet::new(1.00000261, 0.01671123, -0.00001531, 100.46457166, 102.93768193, 0.0),
        ElementSet::new(0.00000562, -0.00004392, -0.01294668, 35999.37244981, 0.32327364, 0.0),
    ),
    (
        PlanetId::Mars,
        ElementSet::new(1.52371034, 0.09339410, 1.84969142, -4.55343205, -23.94362959, 49.55953891),
        ElementSet::new(0.00001847, 0.00007882, -0.00813131, 19140.30268499, 0.44441088, -0.29257343),
    ),
    (
        PlanetId::Jupiter,
        ElementSet::new(5.20288700, 0.04838624, 1.30439695, 34.39644051, 14.72847983, 100.47390909),
        ElementSet::new(-0.00011607, -0.00013253, -0.00183714, 3034.74612775, 0.21252668, 0.20469106),
    ),
    (
        PlanetId::Saturn,
        ElementSet::new(9.53667594, 0.05386179, 2.48599187, 49.95424423, 92.59887831, 113.66242448),
        ElementSet::new(-0.00125060, -0.00050991, 0.00193609, 1222.49362201, -0.41897216, -0.28867794),
    ),
    (
        PlanetId::Uranus,
        ElementSet::new(19.18916464, 0.04725744, 0.77263783, 313.23810451, 170.95427630, 74.01692503),
        ElementSet::new(-0.00196176, -0.00004397, -0.00242939, 428.48202785, 0.40805281, 0.04240589),
    ),
    (
        PlanetId::Neptune,
        ElementSet::new(30.06992276, 0.00859048, 1.77004347, -55.12002969, 44.96476227, 131.78422574),
        ElementSet::new(0.00026291, 0.00005105, 0.00035372, 218.45945325, -0.32241464, -0.00508664),
    ),
];

/// Table 2a, valid 3000 BC - 3000 AD.
const TABLE_3000BC_3000AD: [TableRow; 9] = [
    (
        PlanetId::Mercury,
        ElementSet::new(0.38709843, 0.20563661, 7.00559432, 252.25166724, 77.45771895, 48.33961819),
        ElementSet::new(0.00000000, 0.00002123, -0.00590158, 149472.67486623, 0.15940013, -0.12214182),
    ),
    (
        PlanetId::Venus,
        ElementSet::new(0.72332102, 0.00676399, 3.39777545, 181.97970850, 131.76755713, 76.67261496),
        ElementSet::new(-0.00000026, -0.00005107, 0.00043494, 58517.81560260, 0.05679648, -0.27274174),
    ),
    (
        PlanetId::Earth,
        ElementSet::new(1.00000018, 0.01673163, -0.00054346, 100.46691572, 102.93005885, -5.11260389),
        ElementSet::new(-0.00000003, -0.00003661, -0.01337178, 35999.37306329, 0.31795260, -0.24123856),
    ),
    (
        PlanetId::Mars,
        ElementSet::new(1.52371243, 0.09336511, 1.85181869, -4.56813164, -23.91744784, 49.71320984),
        ElementSet::new(0.00000097, 0.00009149, -0.00724757, 19140.29934243, 0.45223625, -0.26852431),
    ),
    (
        PlanetId::Jupiter,
        ElementSet::new(5.20248019, 0.04853590, 1.29861416, 34.33479152, 14.27495244, 100.29282654),
        ElementSet::new(-0.00002864, 0.00018026, -0.00322699, 3034.90371757, 0.18199196, 0.13024619),
    ),
    (
        PlanetId::Saturn,
        ElementSet::new(9.54149883, 0.05550825, 2.49424102, 50.07571329, 92.86136063, 113.63998702),
        ElementSet::new(-0.00003065, -0.00032044, 0.00451969, 1222.11494724, 0.54179478, -0.25015002),
    ),
    (
        PlanetId::Uranus,
        ElementSet::new(19.18797948, 0.04685740, 0.77298127, 314.20276625, 172.43404441, 73.96250215),
        ElementSet::new(-0.00020455, -0.00001550, -0.00180155, 428.49512595, 0.09266985, 0.05739699),
    ),
    (
        PlanetId::Neptune,
        ElementSet::new(30.06952752, 0.00895439, 1.77005520, 304.22289287, 46.68158724, 131.78635853),
        ElementSet::new(0.00006447, 0.00000818, 0.00022400, 218.46515314, 0.01009938, -0.00606302),
    ),
    (
        PlanetId::Pluto,
        ElementSet::new(39.48686035, 0.24885238, 17.14104260, 238.96535011, 224.09702598, 110.30167986),
        ElementSet::new(0.00449751, 0.00006016, 0.00000501, 145.18042903, -0.00968827, -0.00809981),
    ),
];

/// Table 2b mean-anomaly terms for Jupiter through Pluto, in table order.
const OUTER_TERMS: [MeanAnomalyTerms; 5] = [
    MeanAnomalyTerms { b: -0.00012452, c: 0.06064060, s: -0.35635438, f: 38.35125000 },
    MeanAnomalyTerms { b: 0.00025899, c: -0.13434469, s: 0.87320147, f: 38.35125000 },
    MeanAnomalyTerms { b: 0.00058331, c: -0.97731848, s: 0.17689245, f: 7.67025000 },
    MeanAnomalyTerms { b: -0.00041348, c: 0.68346318, s: -0.10162547, f: 7.67025000 },
    MeanAnomalyTerms { b: -0.01262724, c: 0.0, s: 0.0, f: 0.0 },
];

/// Index of the first body that carries Table 2b terms (Jupiter).
const FIRST_OUTER_INDEX: usize = 4;

fn build(rows: &[TableRow]) -> Vec<OrbitalElements> {
    rows.iter()
        .enumerate()
        .map(|(index, (id, base, rates))| {
            OrbitalElements::new(id.name(), index, *base, *rates).with_mass(id.mass_solar())
        })
        .collect()
}

/// The eight planets from Table 1 (1800 AD - 2050 AD).
pub fn standard_planets() -> Vec<OrbitalElements> {
    build(&TABLE_1800_2050)
}

/// Mercury through Pluto from Table 2a (3000 BC - 3000 AD), with the
/// Table 2b mean-anomaly terms attached to Jupiter and beyond.
pub fn long_span_planets() -> Vec<OrbitalElements> {
    build(&TABLE_3000BC_3000AD)
        .into_iter()
        .map(|body| {
            if body.index >= FIRST_OUTER_INDEX {
                let terms = OUTER_TERMS[body.index - FIRST_OUTER_INDEX];
                body.with_terms(terms)
            } else {
                body
            }
        })
        .collect()
}
