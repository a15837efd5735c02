//! Resolution of a segment's type and variant into concrete generator
//! configurations.
//!
//! The resolver owns an immutable [`TypeRegistry`] and never mutates it.
//! Unknown types and empty model lists are recovered locally: the segment
//! simply gets no content of the affected kind.
use tracing::warn;

use crate::config::registry::{TypeRegistry, TypeTemplate, VariantOverride};
use crate::config::{CloneMode, GeneratorConfig, JustifyWidth};
use crate::error::{Error, Result};
use crate::segment::{SegmentParams, Side};

/// Segment-level surface styling derived from the type template.
///
/// Applied host-side; carried through so the owning controller can re-derive
/// visual parameters on type changes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SurfaceStyle {
    pub surface: String,
    pub color: String,
    pub level: i32,
}

/// Outcome of resolving a segment's type and variant.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution {
    /// The segment uses the custom variant: callers must keep whatever
    /// generator configurations already exist, untouched.
    Preserve,
    /// Replace the attached generators with this list, in order.
    Replace {
        generators: Vec<GeneratorConfig>,
        surface: SurfaceStyle,
    },
}

impl Resolution {
    fn empty() -> Self {
        Resolution::Replace {
            generators: Vec::new(),
            surface: SurfaceStyle::default(),
        }
    }
}

/// Resolves `(type, variant, segment params)` into generator configurations.
pub struct ConfigResolver {
    registry: TypeRegistry,
}

impl ConfigResolver {
    pub fn new(registry: TypeRegistry) -> Self {
        Self { registry }
    }

    /// Resolver over the stock street vocabulary.
    pub fn builtin() -> Self {
        Self::new(TypeRegistry::builtin())
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Resolves the generator set for the given segment parameters.
    ///
    /// Unknown types resolve to an empty list, not an error to the caller.
    pub fn resolve(&self, params: &SegmentParams) -> Resolution {
        if params.is_custom_variant() {
            return Resolution::Preserve;
        }

        let Some(template) = self.registry.get(&params.type_id) else {
            warn!(
                "Unknown segment type '{}'; no content generated.",
                params.type_id
            );
            return Resolution::empty();
        };

        let mut generators = template.generated.clone();
        let mut surface = SurfaceStyle {
            surface: template.surface.clone(),
            color: template.color.clone(),
            level: template.level,
        };

        if let Some(over) = template.variants.get(&params.variant) {
            apply_variant(&mut generators, &mut surface, over);
        }

        if params.type_id == "building" {
            derive_building_facing(&mut generators, params.side);
        }

        self.attach_footprints(&mut generators);
        generators.retain(|config| match config {
            GeneratorConfig::Clones(c) => {
                let keep = c.models.iter().any(|m| !m.trim().is_empty());
                if !keep {
                    warn!(
                        "Skipping clones generator for '{}': empty model list.",
                        params.type_id
                    );
                }
                keep
            }
            GeneratorConfig::Stencil(c) => c.models.iter().any(|m| !m.trim().is_empty()),
            _ => true,
        });

        Resolution::Replace {
            generators,
            surface,
        }
    }

    /// Template lookup without variant application, for hosts that need the
    /// raw declaration (e.g. editors listing a type's defaults).
    pub fn template(&self, type_id: &str) -> Result<&TypeTemplate> {
        self.registry
            .get(type_id)
            .ok_or_else(|| Error::UnknownSegmentType {
                id: type_id.to_owned(),
            })
    }

    fn attach_footprints(&self, generators: &mut [GeneratorConfig]) {
        for config in generators.iter_mut() {
            if let GeneratorConfig::Clones(clones) = config {
                if clones.mode == CloneMode::Fit {
                    clones.footprints = clones
                        .models
                        .iter()
                        .map(|model| self.registry.footprint(model))
                        .collect();
                }
            }
        }
    }
}

/// Substitutes the override's non-empty fields into the first clones
/// declaration only; other declarations are unaffected.
fn apply_variant(
    generators: &mut [GeneratorConfig],
    surface: &mut SurfaceStyle,
    over: &VariantOverride,
) {
    if let Some(s) = &over.surface {
        surface.surface = s.clone();
    }

    let Some(first_clones) = generators.iter_mut().find_map(|config| match config {
        GeneratorConfig::Clones(c) => Some(c),
        _ => None,
    }) else {
        return;
    };

    if over.models.iter().any(|m| !m.trim().is_empty()) {
        first_clones.models = over.models.clone();
    } else {
        // An explicitly blank variant (e.g. building "water") clears the
        // model list so the declaration is skipped.
        first_clones.models.clear();
    }
    if let Some(spacing) = over.spacing {
        first_clones.spacing = spacing;
    }
    if let Some(mode) = over.mode {
        first_clones.mode = mode;
    }
    if let Some(position_y) = over.position_y {
        first_clones.position_y = position_y;
    }
}

fn derive_building_facing(generators: &mut [GeneratorConfig], side: Side) {
    let Some(first_clones) = generators.iter_mut().find_map(|config| match config {
        GeneratorConfig::Clones(c) => Some(c),
        _ => None,
    }) else {
        return;
    };

    first_clones.facing = match side {
        Side::Left => 90.0,
        Side::Right => 270.0,
    };

    if first_clones.mode == CloneMode::Fit && first_clones.justify_width.is_none() {
        first_clones.justify_width = Some(match side {
            Side::Right => JustifyWidth::Left,
            Side::Left => JustifyWidth::Right,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClonesConfig, GeneratorKind};
    use crate::segment::SegmentParams;

    fn first_clones(generators: &[GeneratorConfig]) -> Option<&ClonesConfig> {
        generators.iter().find_map(|config| match config {
            GeneratorConfig::Clones(c) => Some(c),
            _ => None,
        })
    }

    fn params(type_id: &str, variant: &str) -> SegmentParams {
        SegmentParams::new(1, type_id)
            .with_variant(variant)
            .with_dimensions(3.0, 60.0)
    }

    fn replace(resolution: Resolution) -> (Vec<GeneratorConfig>, SurfaceStyle) {
        match resolution {
            Resolution::Replace {
                generators,
                surface,
            } => (generators, surface),
            Resolution::Preserve => panic!("expected Replace"),
        }
    }

    #[test]
    fn custom_variant_preserves_existing_configuration() {
        let resolver = ConfigResolver::builtin();
        let resolution = resolver.resolve(&params("drive-lane", "custom"));
        assert_eq!(resolution, Resolution::Preserve);
    }

    #[test]
    fn unknown_type_resolves_to_empty_list() {
        let resolver = ConfigResolver::builtin();
        let (generators, _) = replace(resolver.resolve(&params("hyperloop", "default")));
        assert!(generators.is_empty());
    }

    #[test]
    fn strict_template_lookup_names_the_unknown_type() {
        let resolver = ConfigResolver::builtin();
        assert!(resolver.template("drive-lane").is_ok());
        let err = resolver.template("hyperloop").unwrap_err();
        assert!(err.to_string().contains("hyperloop"));
    }

    #[test]
    fn drive_lane_resolves_one_random_clones_generator() {
        let resolver = ConfigResolver::builtin();
        let (generators, surface) = replace(resolver.resolve(&params("drive-lane", "default")));
        assert_eq!(generators.len(), 1);
        let clones = first_clones(&generators).unwrap();
        assert_eq!(clones.mode, CloneMode::Random);
        assert_eq!(clones.spacing, 7.3);
        assert_eq!(clones.count, 4);
        assert_eq!(surface.surface, "asphalt");
    }

    #[test]
    fn variant_override_patches_first_clones_only() {
        let resolver = ConfigResolver::builtin();
        let (generators, _) = replace(resolver.resolve(
            &params("building", "suburban").with_side(Side::Right),
        ));
        let clones = first_clones(&generators).unwrap();
        assert_eq!(clones.spacing, 2.0);
        assert_eq!(clones.models.len(), 3);
        assert!(clones.models[0].starts_with("SM_Bld_House"));
    }

    #[test]
    fn blank_variant_models_skip_the_declaration() {
        let resolver = ConfigResolver::builtin();
        let (generators, _) = replace(resolver.resolve(&params("building", "water")));
        assert!(generators.is_empty());
    }

    #[test]
    fn building_side_derives_facing_and_justify() {
        let resolver = ConfigResolver::builtin();

        let (generators, _) = replace(resolver.resolve(
            &params("building", "brownstone").with_side(Side::Left),
        ));
        let clones = first_clones(&generators).unwrap();
        assert_eq!(clones.facing, 90.0);
        assert_eq!(clones.justify_width, Some(JustifyWidth::Right));

        let (generators, _) = replace(resolver.resolve(
            &params("building", "brownstone").with_side(Side::Right),
        ));
        let clones = first_clones(&generators).unwrap();
        assert_eq!(clones.facing, 270.0);
        assert_eq!(clones.justify_width, Some(JustifyWidth::Left));
    }

    #[test]
    fn fit_mode_gets_footprints_parallel_to_models() {
        let resolver = ConfigResolver::builtin();
        let (generators, _) = replace(resolver.resolve(&params("building", "arcade")));
        let clones = first_clones(&generators).unwrap();
        assert_eq!(clones.footprints.len(), clones.models.len());
        assert!((clones.footprints[0].span - 9.191).abs() < 1e-6);
    }

    #[test]
    fn variant_of_type_without_that_variant_keeps_defaults() {
        let resolver = ConfigResolver::builtin();
        let (generators, _) = replace(resolver.resolve(&params("drive-lane", "brownstone")));
        let clones = first_clones(&generators).unwrap();
        assert_eq!(clones.spacing, 7.3);
    }

    #[test]
    fn non_clones_declarations_are_untouched_by_variants() {
        let resolver = ConfigResolver::builtin();
        let (generators, _) = replace(resolver.resolve(&params("bus-lane", "default")));
        let kinds: Vec<GeneratorKind> = generators.iter().map(|g| g.kind()).collect();
        assert_eq!(kinds, vec![GeneratorKind::Clones, GeneratorKind::Stencil]);
    }
}
