//! CRS code strings: alias normalization, URN parsing, SRS compatibility.

use std::ops::RangeInclusive;

pub const EPSG_4326: &str = "EPSG:4326";
pub const EPSG_3857: &str = "EPSG:3857";
pub const EPSG_900913: &str = "EPSG:900913";

/// Codes allocated by the EPSG dataset.
const EPSG_CODE_RANGE: RangeInclusive<u32> = 1024..=32767;

const URN_CRS_PREFIX: &str = "urn:ogc:def:crs:";

/// Normalize a code to its numeric `EPSG:NNNN` form.
///
/// `EPSG:WGS84` and `EPSG:OGC:CRS84` become `EPSG:4326`, `EPSG:900913` becomes
/// `EPSG:3857`. Non-EPSG codes and numbers outside the EPSG range give `None`.
pub fn make_numeric_epsg(code: &str) -> Option<String> {
    let code = code.trim();
    match code {
        "EPSG:WGS84" | "EPSG:OGC:CRS84" => return Some(EPSG_4326.to_string()),
        EPSG_900913 => return Some(EPSG_3857.to_string()),
        _ => {}
    }
    let number = code
        .strip_prefix("EPSG:")
        .or_else(|| code.strip_prefix("epsg:"))?;
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let number: u32 = number.parse().ok()?;
    EPSG_CODE_RANGE
        .contains(&number)
        .then(|| format!("EPSG:{number}"))
}

/// Extract `AUTH:CODE` (or the bare code) from `urn:ogc:def:crs:AUTH:VERSION:CODE`.
pub fn extract_crs_from_urn(urn: &str) -> Option<String> {
    let rest = urn.strip_prefix(URN_CRS_PREFIX)?;
    let mut parts = rest.splitn(3, ':');
    let authority = parts.next()?;
    let _version = parts.next()?;
    let code = parts.next()?;
    if code.is_empty() {
        return None;
    }
    if authority.is_empty() {
        Some(code.to_string())
    } else {
        Some(format!("{authority}:{code}"))
    }
}

/// Pick `srs`, or its Web Mercator alias when only the alias is allowed.
pub fn compatible_srs(srs: &str, allowed: &[&str]) -> String {
    let is_allowed = |code: &str| allowed.contains(&code);
    if srs == EPSG_900913 && !is_allowed(EPSG_900913) && is_allowed(EPSG_3857) {
        return EPSG_3857.to_string();
    }
    if srs == EPSG_3857 && !is_allowed(EPSG_3857) && is_allowed(EPSG_900913) {
        return EPSG_900913.to_string();
    }
    srs.to_string()
}

/// Rewrite `EPSG:900913` to `EPSG:3857`, then fall back to a compatible alias
/// if an allow list is given and rejects the result.
pub fn normalize_srs(srs: &str, allowed: Option<&[&str]>) -> String {
    let result = if srs == EPSG_900913 { EPSG_3857 } else { srs };
    match allowed {
        Some(allowed) if !allowed.contains(&result) => compatible_srs(result, allowed),
        _ => result.to_string(),
    }
}

/// True for both spellings of Web Mercator.
pub fn is_web_mercator(code: &str) -> bool {
    normalize_srs(code, None) == EPSG_3857
}
