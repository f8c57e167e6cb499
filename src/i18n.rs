/*============================================================
  Synavera Project: Senlin-Client
  Module: senlin_client::i18n
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Single lookup point for user-facing message fragments so a
    catalog can be wired in without touching call sites.

  Security / Safety Notes:
    Pure function; no I/O.

  Dependencies:
    None beyond std.

  Operational Scope:
    Used by exception rendering and classifier diagnostics.

  Revision History:
    2026-10-17 COD  Introduced pass-through translation hook.
  ------------------------------------------------------------
  SSE Principles Observed:
    - One seam for localisation
============================================================*/

/// Look up the localised form of a literal message fragment.
///
/// Fragments are fixed phrases (labels, fallbacks); dynamic values are
/// formatted around them by the caller. No catalog is bundled, so the
/// fragment is returned unchanged.
pub fn translate(fragment: &'static str) -> &'static str {
    fragment
}

#[cfg(test)]
mod tests {
    use super::translate;

    #[test]
    fn templates_pass_through() {
        assert_eq!(translate("Unknown exception"), "Unknown exception");
    }
}
