//! Microscope metadata picked out of raw image properties.

use std::collections::BTreeMap;

/// Property-key fragments worth keeping, with the name they are stored under.
pub const WANTED_METADATA: [(&str, &str); 3] = [
    ("DisplaySetting|Channel|DyeName", "DyeName"),
    (
        "Information|Image|Channel|EmissionWavelength",
        "EmissionWavelength",
    ),
    (
        "Information|Image|Channel|ExcitationWavelength",
        "ExcitationWavelength",
    ),
];

pub type Metadata = BTreeMap<String, String>;

/// Filter `properties` down to the wanted microscope fields.
///
/// A key is kept when it contains one of the [`WANTED_METADATA`] fragments.
/// Values shaped like `name = value` keep only the trimmed right-hand side.
/// `image_height`, when known, is stored as `Image_Height`.
pub fn collect_metadata<'a, I>(image_height: Option<u32>, properties: I) -> Metadata
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut out = Metadata::new();
    if let Some(h) = image_height {
        out.insert("Image_Height".to_string(), h.to_string());
    }
    for (key, value) in properties {
        let Some((_, name)) = WANTED_METADATA.iter().find(|(k, _)| key.contains(k)) else {
            continue;
        };
        let value = match value.split_once('=') {
            Some((_, rhs)) => rhs.trim(),
            None => value,
        };
        out.insert((*name).to_string(), value.to_string());
    }
    out
}
