//! Label-Pools für Linien (A–Z, L27, …) und Winkel (θ1, θ2, …).

use std::collections::HashSet;

/// Liefert das erste unbenutzte Linien-Label.
///
/// Pool-Reihenfolge: A–Z, danach Überlauf-Labels L27, L28, …
/// Ein durch Löschung freigewordenes Label wird beim nächsten Scan
/// wieder vergeben.
pub fn next_line_label<'a>(used: impl IntoIterator<Item = &'a str>) -> String {
    let used: HashSet<&str> = used.into_iter().collect();

    let mut index = 0u32;
    loop {
        let candidate = line_label_at(index);
        if !used.contains(candidate.as_str()) {
            return candidate;
        }
        index += 1;
    }
}

/// Linien-Label an Pool-Position `index` (0-basiert): 0→"A", 25→"Z", 26→"L27".
fn line_label_at(index: u32) -> String {
    if index < 26 {
        ((b'A' + index as u8) as char).to_string()
    } else {
        format!("L{}", index + 1)
    }
}

/// Liefert das erste unbenutzte Winkel-Label (θ1, θ2, …).
///
/// Der nominelle Pool ist θ1–θ99; der Scan läuft bei Bedarf darüber hinaus.
pub fn next_angle_label<'a>(used: impl IntoIterator<Item = &'a str>) -> String {
    let used: HashSet<&str> = used.into_iter().collect();

    let mut n = 1u32;
    loop {
        let candidate = format!("θ{}", n);
        if !used.contains(candidate.as_str()) {
            return candidate;
        }
        n += 1;
    }
}
