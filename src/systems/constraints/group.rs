use serde::{Deserialize, Serialize};

use crate::domain::ShapeKind;

/// Solver behaviors a body can belong to.
///
/// `Elasticity` and `Density` together form the per-body material group:
/// ellipses get elasticity, rectangles get density, never both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConstraintGroup {
    Gravity,
    BoundaryCollision,
    Elasticity,
    Density,
}

pub const GROUP_GRAVITY: u8 = 1 << 0;
pub const GROUP_BOUNDARY_COLLISION: u8 = 1 << 1;
pub const GROUP_ELASTICITY: u8 = 1 << 2;
pub const GROUP_DENSITY: u8 = 1 << 3;

impl ConstraintGroup {
    pub const ALL: [ConstraintGroup; 4] = [
        ConstraintGroup::Gravity,
        ConstraintGroup::BoundaryCollision,
        ConstraintGroup::Elasticity,
        ConstraintGroup::Density,
    ];

    #[inline]
    pub fn bit(self) -> u8 {
        match self {
            ConstraintGroup::Gravity => GROUP_GRAVITY,
            ConstraintGroup::BoundaryCollision => GROUP_BOUNDARY_COLLISION,
            ConstraintGroup::Elasticity => GROUP_ELASTICITY,
            ConstraintGroup::Density => GROUP_DENSITY,
        }
    }

    pub fn is_material(self) -> bool {
        matches!(self, ConstraintGroup::Elasticity | ConstraintGroup::Density)
    }
}

/// Material group for a shape kind
#[inline]
pub fn material_group(kind: ShapeKind) -> ConstraintGroup {
    match kind {
        ShapeKind::Ellipse => ConstraintGroup::Elasticity,
        ShapeKind::Rectangle => ConstraintGroup::Density,
    }
}

/// Small bitset of groups
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GroupSet(u8);

impl GroupSet {
    pub const EMPTY: GroupSet = GroupSet(0);
    pub const GRAVITY: GroupSet = GroupSet(GROUP_GRAVITY);

    pub fn of(groups: &[ConstraintGroup]) -> Self {
        groups.iter().fold(Self::EMPTY, |set, g| set.with(*g))
    }

    /// Everything the solver pushes on while a body is being edited
    pub fn contact(material: ConstraintGroup) -> Self {
        Self::of(&[ConstraintGroup::BoundaryCollision, material])
    }

    /// Full membership of a freshly spawned body
    pub fn spawned(material: ConstraintGroup) -> Self {
        Self::contact(material).with(ConstraintGroup::Gravity)
    }

    #[inline]
    pub fn with(self, group: ConstraintGroup) -> Self {
        GroupSet(self.0 | group.bit())
    }

    #[inline]
    pub fn without(self, group: ConstraintGroup) -> Self {
        GroupSet(self.0 & !group.bit())
    }

    #[inline]
    pub fn contains(self, group: ConstraintGroup) -> bool {
        self.0 & group.bit() != 0
    }

    pub fn intersection(self, other: GroupSet) -> Self {
        GroupSet(self.0 & other.0)
    }

    pub fn difference(self, other: GroupSet) -> Self {
        GroupSet(self.0 & !other.0)
    }

    pub fn union(self, other: GroupSet) -> Self {
        GroupSet(self.0 | other.0)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = ConstraintGroup> {
        ConstraintGroup::ALL.into_iter().filter(move |g| self.contains(*g))
    }

    /// Number of material groups in the set (0 or 1 for a healthy body)
    pub fn material_count(self) -> usize {
        self.iter().filter(|g| g.is_material()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawned_set_has_exactly_one_material() {
        let ellipse = GroupSet::spawned(material_group(ShapeKind::Ellipse));
        assert_eq!(ellipse.len(), 3);
        assert!(ellipse.contains(ConstraintGroup::Elasticity));
        assert!(!ellipse.contains(ConstraintGroup::Density));
        assert_eq!(ellipse.material_count(), 1);

        let rect = GroupSet::spawned(material_group(ShapeKind::Rectangle));
        assert!(rect.contains(ConstraintGroup::Density));
        assert!(!rect.contains(ConstraintGroup::Elasticity));
    }

    #[test]
    fn set_algebra() {
        let a = GroupSet::of(&[ConstraintGroup::Gravity, ConstraintGroup::Density]);
        let b = GroupSet::of(&[ConstraintGroup::Density, ConstraintGroup::BoundaryCollision]);
        assert_eq!(a.intersection(b), GroupSet::of(&[ConstraintGroup::Density]));
        assert_eq!(a.difference(b), GroupSet::GRAVITY);
        assert_eq!(a.union(b).len(), 3);
        assert!(GroupSet::EMPTY.is_empty());
        assert_eq!(a.without(ConstraintGroup::Gravity).iter().collect::<Vec<_>>(), vec![ConstraintGroup::Density]);
    }
}
