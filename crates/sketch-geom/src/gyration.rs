//! Radius of gyration

use lin_alg::f64::Vec3;

use crate::{AtomSource, GeomError, GeomResult, State};

/// Radius of gyration together with the center it was measured from
#[derive(Debug, Clone, Copy)]
pub struct Gyration {
    /// Weighted center of the selection
    pub center: Vec3,
    pub radius: f64,
}

/// Radius of gyration of the selection and its weighted center
///
/// `sqrt(Σ w_i |p_i - c|² / Σ w_i)` where `c` is the weighted center and
/// `w_i` is the atom mass, or 1 for every atom when `mass_weighted` is false.
pub fn gyration<S: AtomSource + ?Sized>(
    source: &S,
    selection: &str,
    state: State,
    mass_weighted: bool,
) -> GeomResult<Gyration> {
    let atoms = source.atoms(selection, state.resolve(source))?;
    if atoms.is_empty() {
        return Err(GeomError::EmptySelection(selection.to_string()));
    }

    let weight = |mass: f64| if mass_weighted { mass } else { 1.0 };

    let mut total = 0.0;
    let mut sum = Vec3::new(0.0, 0.0, 0.0);
    for atom in &atoms {
        let w = weight(atom.mass);
        total += w;
        sum = sum + atom.position * w;
    }
    if total == 0.0 {
        return Err(GeomError::DivideByZero(selection.to_string()));
    }
    let center = sum * (1.0 / total);

    let spread: f64 = atoms
        .iter()
        .map(|atom| weight(atom.mass) * (atom.position - center).magnitude_squared())
        .sum();

    log::trace!("rgyr: {} atoms, total weight {}", atoms.len(), total);
    Ok(Gyration {
        center,
        radius: (spread / total).sqrt(),
    })
}

/// Radius of gyration of the selection
pub fn radius_of_gyration<S: AtomSource + ?Sized>(
    source: &S,
    selection: &str,
    state: State,
    mass_weighted: bool,
) -> GeomResult<f64> {
    gyration(source, selection, state, mass_weighted).map(|g| g.radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{atom, FixedSource};

    #[test]
    fn test_two_atoms_unweighted() {
        let source = FixedSource::single(vec![atom(0.0, 0.0, 0.0, 12.0), atom(2.0, 0.0, 0.0, 12.0)]);
        let rg = radius_of_gyration(&source, "all", State::Current, false).unwrap();
        assert!((rg - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_unweighted_is_rms_distance() {
        let source = FixedSource::single(vec![
            atom(0.0, 0.0, 0.0, 1.0),
            atom(3.0, 0.0, 0.0, 14.0),
            atom(0.0, 3.0, 0.0, 16.0),
        ]);
        // Centroid (1, 1, 0); squared distances 2, 5, 5
        let expected = (12.0f64 / 3.0).sqrt();
        let rg = radius_of_gyration(&source, "all", State::Current, false).unwrap();
        assert!((rg - expected).abs() < 1e-12);
    }

    #[test]
    fn test_mass_weighted() {
        let source = FixedSource::single(vec![atom(0.0, 0.0, 0.0, 3.0), atom(4.0, 0.0, 0.0, 1.0)]);
        // Weighted center at x = 1; sqrt((3 * 1 + 1 * 9) / 4)
        let expected = 3.0f64.sqrt();
        let rg = radius_of_gyration(&source, "all", State::Current, true).unwrap();
        assert!((rg - expected).abs() < 1e-12);
    }

    #[test]
    fn test_single_atom_is_zero() {
        let source = FixedSource::single(vec![atom(5.0, -2.0, 1.0, 12.0)]);
        assert_eq!(radius_of_gyration(&source, "all", State::Current, true).unwrap(), 0.0);
    }

    #[test]
    fn test_empty_selection() {
        let source = FixedSource::single(Vec::new());
        assert_eq!(
            radius_of_gyration(&source, "none", State::Current, true),
            Err(GeomError::EmptySelection("none".to_string()))
        );
    }

    #[test]
    fn test_zero_total_mass() {
        let source = FixedSource::single(vec![atom(0.0, 0.0, 0.0, 0.0), atom(1.0, 0.0, 0.0, 0.0)]);
        assert_eq!(
            radius_of_gyration(&source, "ghost", State::Current, true),
            Err(GeomError::DivideByZero("ghost".to_string()))
        );
        // Unweighted ignores masses entirely
        assert!(radius_of_gyration(&source, "ghost", State::Current, false).is_ok());
    }

    #[test]
    fn test_weighted_center() {
        let source = FixedSource::single(vec![atom(0.0, 0.0, 0.0, 1.0), atom(4.0, 0.0, 0.0, 3.0)]);

        let weighted = gyration(&source, "all", State::Current, true).unwrap();
        assert!((weighted.center.x - 3.0).abs() < 1e-12);

        let plain = gyration(&source, "all", State::Current, false).unwrap();
        assert!((plain.center.x - 2.0).abs() < 1e-12);
        assert!((plain.radius - 2.0).abs() < 1e-12);
    }
}
