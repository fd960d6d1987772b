//! The fixed catalog of crushable objects.
//!
//! The catalog is built once at startup by [`Catalog::seeded`] and is
//! read-only afterwards. Lookups are linear over five entries, which keeps
//! insertion order trivially stable for `GET /api/objects`.

use crushsim_types::{CatalogObject, ObjectKind, ParticleMaterial};

/// Read-only collection of [`CatalogObject`]s in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    objects: Vec<CatalogObject>,
}

impl Catalog {
    /// Build a catalog from an explicit object list.
    ///
    /// Later entries whose `id` repeats an earlier one are unreachable
    /// through [`Catalog::get`].
    pub const fn new(objects: Vec<CatalogObject>) -> Self {
        Self { objects }
    }

    /// Build the standard five-object catalog.
    pub fn seeded() -> Self {
        Self::new(vec![
            object(
                "can_aluminum",
                "Aluminum Can",
                ObjectKind::Can,
                1,
                "can_crush.mp3",
                ParticleMaterial::Metal,
                &[100, 50, 200],
                2.5,
                8,
            ),
            object(
                "cardboard_box",
                "Cardboard Box",
                ObjectKind::Box,
                2,
                "cardboard_crush.mp3",
                ParticleMaterial::Paper,
                &[150, 100, 150, 100],
                3.0,
                7,
            ),
            object(
                "phone_old",
                "Old Phone",
                ObjectKind::Electronics,
                3,
                "electronics_crush.mp3",
                ParticleMaterial::Mixed,
                &[200, 150, 300, 100],
                4.0,
                10,
            ),
            object(
                "glass_bottle",
                "Glass Bottle",
                ObjectKind::Glass,
                4,
                "glass_shatter.mp3",
                ParticleMaterial::Glass,
                &[50, 200, 50, 200, 300],
                1.8,
                9,
            ),
            object(
                "plastic_bottle",
                "Plastic Bottle",
                ObjectKind::Plastic,
                1,
                "plastic_crush.mp3",
                ParticleMaterial::Plastic,
                &[80, 40, 120],
                2.2,
                6,
            ),
        ])
    }

    /// All objects, in insertion order.
    pub fn list(&self) -> &[CatalogObject] {
        &self.objects
    }

    /// Look up an object by its slug.
    pub fn get(&self, id: &str) -> Option<&CatalogObject> {
        self.objects.iter().find(|obj| obj.id == id)
    }

    /// Number of objects in the catalog.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the catalog has no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

#[allow(clippy::too_many_arguments)]
fn object(
    id: &str,
    name: &str,
    kind: ObjectKind,
    difficulty: u32,
    sound: &str,
    particles: ParticleMaterial,
    vibration_pattern: &[u32],
    crush_time: f64,
    satisfaction_score: u32,
) -> CatalogObject {
    CatalogObject {
        id: id.to_owned(),
        name: name.to_owned(),
        kind,
        difficulty,
        sound: sound.to_owned(),
        particles,
        vibration_pattern: vibration_pattern.to_vec(),
        crush_time,
        satisfaction_score,
    }
}
