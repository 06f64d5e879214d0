//! Canonical option names.
//!
//! HTML attribute names carry no casing, so `data-dt_scrolly` has to be
//! mapped back to the renderer's `scrollY`. The table is fixed and built
//! once per process.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Option name the builder always forces on.
pub const DESTROY: &str = "destroy";

/// Option name the column list is attached under.
pub const COLUMNS: &str = "columns";

/// Lower-case short name → canonical option name.
const OPTION_NAMES: &[(&str, &str)] = &[
    // Base options
    ("autowidth", "autoWidth"),
    ("deferrender", "deferRender"),
    ("info", "info"),
    ("jqueryui", "jQueryUI"),
    ("lengthchange", "lengthChange"),
    ("ordering", "ordering"),
    ("paging", "paging"),
    ("processing", "processing"),
    ("scrollx", "scrollX"),
    ("scrolly", "scrollY"),
    ("searching", "searching"),
    ("serverside", "serverSide"),
    ("statesave", "stateSave"),
    ("data", "data"),
    ("ajax", "ajax"),
    ("createdrow", "createdRow"),
    ("drawcallback", "drawCallback"),
    ("footercallback", "footerCallback"),
    ("formatnumber", "formatNumber"),
    ("headercallback", "headerCallback"),
    ("infocallback", "infoCallback"),
    ("initcomplete", "initComplete"),
    ("predrawcallback", "preDrawCallback"),
    ("rowcallback", "rowCallback"),
    ("stateloadcallback", "stateLoadCallback"),
    ("stateloaded", "stateLoaded"),
    ("stateloadparams", "stateLoadParams"),
    ("statesavecallback", "stateSaveCallback"),
    ("statesaveparams", "stateSaveParams"),
    ("deferloading", "deferLoading"),
    ("destroy", "destroy"),
    ("displaystart", "displayStart"),
    ("dom", "dom"),
    ("lengthmenu", "lengthMenu"),
    ("ordercellstop", "orderCellsTop"),
    ("orderclasses", "orderClasses"),
    ("order", "order"),
    ("orderfixed", "orderFixed"),
    ("ordermulti", "orderMulti"),
    ("pagelength", "pageLength"),
    ("pagingtype", "pagingType"),
    ("renderer", "renderer"),
    ("retrieve", "retrieve"),
    ("scrollcollapse", "scrollCollapse"),
    ("search", "search"),
    ("stateduration", "stateDuration"),
    ("stripeclasses", "stripeClasses"),
    ("tabindex", "tabIndex"),
    ("columndefs", "columnDefs"),
    ("columns", "columns"),
    ("language", "language"),
    // Extensions
    ("tabletools", "tableTools"),
    ("scroller", "scroller"),
    ("responsive", "responsive"),
];

static TABLE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| OPTION_NAMES.iter().copied().collect());

/// Maps a short option name to its canonical form.
///
/// Lookup is case-insensitive on the short name.
///
/// ```
/// use initiatable::canonical_name;
///
/// assert_eq!(canonical_name("scrolly"), Some("scrollY"));
/// assert_eq!(canonical_name("PageLength"), Some("pageLength"));
/// assert_eq!(canonical_name("nope"), None);
/// ```
pub fn canonical_name(short: &str) -> Option<&'static str> {
    if let Some(name) = TABLE.get(short) {
        return Some(*name);
    }
    TABLE.get(short.to_ascii_lowercase().as_str()).copied()
}

/// Returns `true` if `name` is a canonical option name.
pub fn is_canonical(name: &str) -> bool {
    OPTION_NAMES.iter().any(|(_, canonical)| *canonical == name)
}

/// Iterates every `(short, canonical)` pair in table order.
pub fn option_names() -> impl Iterator<Item = (&'static str, &'static str)> {
    OPTION_NAMES.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_are_lower_case_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for (short, _) in option_names() {
            assert_eq!(short, short.to_ascii_lowercase());
            assert!(seen.insert(short), "duplicate short name {short}");
        }
        assert_eq!(TABLE.len(), OPTION_NAMES.len());
    }

    #[test]
    fn canonical_names_round_trip_to_short() {
        for (short, canonical) in option_names() {
            assert_eq!(canonical.to_ascii_lowercase(), short);
            assert!(is_canonical(canonical));
        }
    }

    #[test]
    fn server_side_is_reachable_from_markup() {
        assert_eq!(canonical_name("serverside"), Some("serverSide"));
    }

    #[test]
    fn forced_names_are_in_the_table() {
        assert_eq!(canonical_name(DESTROY), Some(DESTROY));
        assert_eq!(canonical_name(COLUMNS), Some(COLUMNS));
    }

    #[test]
    fn unknown_names_miss() {
        assert_eq!(canonical_name("undefined"), None);
        assert_eq!(canonical_name(""), None);
        assert!(!is_canonical("scrolly"));
    }
}
