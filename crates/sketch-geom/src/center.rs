//! Selection centers

use lin_alg::f64::Vec3;

use crate::{AtomSource, GeomError, GeomResult, State};

/// Center of coordinates: the midpoint of the selection's extent
///
/// This is the center of the bounding box, not the centroid of the atoms.
pub fn center_of_coordinates<S: AtomSource + ?Sized>(
    source: &S,
    selection: &str,
    state: State,
) -> GeomResult<Vec3> {
    let extent = source.extent(selection, state.resolve(source))?;
    let (min, max) = (extent.min, extent.max);

    Ok(Vec3::new(
        min.x + (max.x - min.x) / 2.0,
        min.y + (max.y - min.y) / 2.0,
        min.z + (max.z - min.z) / 2.0,
    ))
}

/// Center of mass of the selection
///
/// Positions are summed without mass weights and divided by the atom count,
/// i.e. the arithmetic mean of the positions.
pub fn center_of_mass<S: AtomSource + ?Sized>(
    source: &S,
    selection: &str,
    state: State,
) -> GeomResult<Vec3> {
    let atoms = source.atoms(selection, state.resolve(source))?;
    if atoms.is_empty() {
        return Err(GeomError::EmptySelection(selection.to_string()));
    }

    let mut sum = Vec3::new(0.0, 0.0, 0.0);
    for atom in &atoms {
        sum = sum + atom.position;
    }
    Ok(sum * (1.0 / atoms.len() as f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{atom, FixedSource};
    use crate::HostError;

    fn assert_vec(v: Vec3, expected: (f64, f64, f64)) {
        assert!(
            (v.x - expected.0).abs() < 1e-12
                && (v.y - expected.1).abs() < 1e-12
                && (v.z - expected.2).abs() < 1e-12,
            "got ({}, {}, {}), expected {:?}",
            v.x,
            v.y,
            v.z,
            expected
        );
    }

    #[test]
    fn test_two_atoms() {
        let source = FixedSource::single(vec![atom(0.0, 0.0, 0.0, 12.0), atom(2.0, 0.0, 0.0, 12.0)]);

        assert_vec(center_of_mass(&source, "all", State::Current).unwrap(), (1.0, 0.0, 0.0));
        assert_vec(
            center_of_coordinates(&source, "all", State::Current).unwrap(),
            (1.0, 0.0, 0.0),
        );
    }

    #[test]
    fn test_center_of_mass_ignores_masses() {
        let source = FixedSource::single(vec![
            atom(0.0, 0.0, 0.0, 1.0),
            atom(4.0, 0.0, 0.0, 100.0),
            atom(2.0, 3.0, 0.0, 16.0),
        ]);
        assert_vec(center_of_mass(&source, "all", State::Current).unwrap(), (2.0, 1.0, 0.0));
    }

    #[test]
    fn test_center_of_mass_order_independent() {
        let a = FixedSource::single(vec![
            atom(1.0, 2.0, 3.0, 1.0),
            atom(-4.0, 0.5, 7.0, 1.0),
            atom(0.0, 9.0, -1.0, 1.0),
        ]);
        let b = FixedSource::single(vec![
            atom(0.0, 9.0, -1.0, 1.0),
            atom(1.0, 2.0, 3.0, 1.0),
            atom(-4.0, 0.5, 7.0, 1.0),
        ]);
        let ca = center_of_mass(&a, "all", State::Current).unwrap();
        let cb = center_of_mass(&b, "all", State::Current).unwrap();
        assert_vec(ca, (cb.x, cb.y, cb.z));
    }

    #[test]
    fn test_center_of_coordinates_is_extent_midpoint() {
        // Mean would be (2.0, 0, 0); the extent midpoint is (5.0, 0, 0)
        let source = FixedSource::single(vec![
            atom(0.0, 0.0, 0.0, 1.0),
            atom(0.0, 0.0, 0.0, 1.0),
            atom(0.0, 0.0, 0.0, 1.0),
            atom(0.0, 0.0, 0.0, 1.0),
            atom(10.0, 0.0, 0.0, 1.0),
        ]);
        assert_vec(
            center_of_coordinates(&source, "all", State::Current).unwrap(),
            (5.0, 0.0, 0.0),
        );
    }

    #[test]
    fn test_specific_and_current_state() {
        let mut source = FixedSource::single(vec![atom(0.0, 0.0, 0.0, 1.0), atom(2.0, 2.0, 2.0, 1.0)]);
        source.states.push(vec![atom(10.0, 0.0, 0.0, 1.0), atom(12.0, 2.0, 2.0, 1.0)]);

        assert_vec(center_of_mass(&source, "all", State::Specific(2)).unwrap(), (11.0, 1.0, 1.0));

        source.current = 2;
        assert_vec(center_of_mass(&source, "all", State::Current).unwrap(), (11.0, 1.0, 1.0));

        // All states aggregate into one result
        assert_vec(center_of_mass(&source, "all", State::All).unwrap(), (6.0, 1.0, 1.0));
    }

    #[test]
    fn test_empty_selection() {
        let source = FixedSource::single(Vec::new());
        assert!(matches!(
            center_of_mass(&source, "none", State::Current),
            Err(GeomError::EmptySelection(sel)) if sel == "none"
        ));
        assert!(matches!(
            center_of_coordinates(&source, "none", State::Current),
            Err(GeomError::Host(HostError::EmptySelection(_)))
        ));
    }

    #[test]
    fn test_host_error_propagates() {
        let source = FixedSource::single(vec![atom(0.0, 0.0, 0.0, 1.0)]);
        assert!(matches!(
            center_of_mass(&source, "all", State::Specific(5)),
            Err(GeomError::Host(HostError::InvalidState { index: 5, count: 1 }))
        ));
    }
}
