//! Object naming for pseudoatom commands

use sketch_scene::HostLike;

/// Pick an object name derived from a selection
///
/// Yields the first free `prefix + legal_name(selection) + suffix`. When the
/// host cannot derive a legal name from the selection, `prefix + suffix` is
/// used as is.
pub fn derived_name<H: HostLike + ?Sized>(
    host: &H,
    selection: &str,
    prefix: &str,
    suffix: &str,
) -> String {
    match host.legal_name(selection) {
        Ok(legal) => host.unused_name(&format!("{}{}{}", prefix, legal, suffix), false),
        Err(e) => {
            log::debug!("No name derived from '{}' ({}), using fallback", selection, e);
            format!("{}{}", prefix, suffix)
        }
    }
}
