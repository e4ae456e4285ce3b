// crates/unspsc-core/src/acronyms.rs

//! # Acronym Dictionary
//!
//! Maps lowercase abbreviations (and a few bare equipment terms) to the
//! phrase used when matching against UNSPSC descriptions.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

#[cfg(feature = "json")]
use crate::error::Result;
#[cfg(feature = "json")]
use std::path::Path;

/// Built-in scientific-instrument and industrial-equipment vocabulary.
const BUILTIN: &[(&str, &str)] = &[
    // Microscopy & Imaging
    ("sem", "scanning electron microscope"),
    ("tem", "transmission electron microscope"),
    ("afm", "atomic force microscope"),
    ("stm", "scanning tunneling microscope"),
    ("xrd", "x-ray diffractometer"),
    ("xrf", "x-ray fluorescence spectrometer"),
    ("wdx", "wavelength dispersive x-ray spectrometer"),
    ("edx", "energy dispersive x-ray spectrometer"),
    ("saxs", "small angle x-ray scattering"),
    ("fe-sem", "field emission scanning electron microscope"),
    ("xps", "x-ray photoelectron spectrometer"),
    ("eds", "energy dispersive spectroscopy"),
    ("feg", "field emission gun"),
    ("ccd", "charge-coupled device"),
    // Spectroscopy
    ("uv-vis", "ultraviolet-visible spectrophotometer"),
    ("ftir", "fourier-transform infrared spectrometer"),
    ("nmr", "nuclear magnetic resonance spectrometer"),
    ("raman", "raman spectrometer"),
    ("aes", "atomic emission spectrometer"),
    ("aas", "atomic absorption spectrometer"),
    ("icp", "inductively coupled plasma spectrometer"),
    ("icp-ms", "inductively coupled plasma mass spectrometer"),
    ("icp-oes", "inductively coupled plasma optical emission spectrometer"),
    ("tof", "time-of-flight mass spectrometer"),
    // Chromatography & Separation
    ("gc", "gas chromatograph"),
    ("lc", "liquid chromatograph"),
    ("hplc", "high performance liquid chromatography"),
    ("uhplc", "ultra high performance liquid chromatography"),
    ("gcms", "gas chromatograph mass spectrometer"),
    ("lcms", "liquid chromatograph mass spectrometer"),
    ("cec", "capillary electrochromatography"),
    ("ms", "mass spectrometer"),
    // Thermal Analysis
    ("tga", "thermogravimetric analyzer"),
    ("dsc", "differential scanning calorimeter"),
    ("dma", "dynamic mechanical analyzer"),
    ("tsa", "thermal shock analyzer"),
    // Industrial & Process Equipment
    ("plc", "programmable logic controller"),
    ("vfd", "variable frequency drive"),
    ("scada", "supervisory control and data acquisition"),
    ("dcs", "distributed control system"),
    ("hvac", "heating ventilation and air conditioning"),
    ("cfd", "computational fluid dynamics"),
    ("pcr", "polymerase chain reaction machine"),
    ("autoclave", "high-pressure sterilization chamber"),
    ("furnace", "high-temperature heating unit"),
    ("reactor", "chemical reaction vessel"),
    ("centrifuge", "rotational separation device"),
    ("spectrometer", "general device for measuring spectra"),
    ("balance", "precision weighing scale"),
    ("ph meter", "device for measuring ph"),
    ("titrator", "automated titration system"),
    ("viscometer", "device for measuring viscosity"),
    ("densitometer", "device for measuring density"),
    ("colorimeter", "device for measuring color intensity"),
    ("laser", "light amplification by stimulated emission of radiation"),
    ("led", "light emitting diode"),
    ("lcd", "liquid crystal display"),
    ("ups", "uninterruptible power supply"),
    ("rpm", "revolutions per minute (motor speed)"),
];

static BUILTIN_TABLE: Lazy<AcronymTable> =
    Lazy::new(|| AcronymTable::from_pairs(BUILTIN.iter().copied()));

/// Immutable abbreviation → expansion mapping.
///
/// Keys and values are stored lowercased and trimmed. The table is built once
/// and handed to [`expand_query`](crate::expand_query) and the matcher by
/// reference, so tests can pass a small fixture instead of the built-in one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcronymTable {
    entries: BTreeMap<String, String>,
}

impl AcronymTable {
    /// The built-in dictionary, initialised on first use.
    pub fn builtin() -> &'static AcronymTable {
        &BUILTIN_TABLE
    }

    /// A dictionary with no entries; disables acronym handling.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table from `(abbreviation, expansion)` pairs.
    ///
    /// Later pairs overwrite earlier ones with the same key. Pairs whose key
    /// is blank after trimming are ignored.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        let entries = pairs
            .into_iter()
            .filter_map(|(k, v)| {
                let key = normalize(k.as_ref());
                if key.is_empty() {
                    None
                } else {
                    Some((key, normalize(v.as_ref())))
                }
            })
            .collect();
        Self { entries }
    }

    /// Read a JSON object of `"abbreviation": "expansion"` pairs.
    #[cfg(feature = "json")]
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let raw: BTreeMap<String, String> =
            serde_json::from_reader(std::io::BufReader::new(file))?;
        tracing::debug!(path = %path.display(), entries = raw.len(), "loaded acronym dictionary");
        Ok(Self::from_pairs(raw))
    }

    /// Overlay `other` on a copy of `self`; entries of `other` win.
    pub fn merged(&self, other: &AcronymTable) -> Self {
        let mut entries = self.entries.clone();
        entries.extend(other.entries.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self { entries }
    }

    /// Expansion for an exact, already-lowercased key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}
