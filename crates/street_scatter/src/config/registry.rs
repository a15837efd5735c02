//! Registry of per-type generator templates and model footprints.
//!
//! The registry is an immutable asset handed to the resolver at construction;
//! nothing in the crate mutates it afterwards. [`TypeRegistry::builtin`]
//! carries the stock street vocabulary, but hosts can register their own
//! types and variants.
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::{GeneratorConfig, TypeId};

/// Extent of one model used by fit-mode packing.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Footprint {
    /// Extent along the segment length axis, in meters.
    pub span: f32,
    /// Extent across the segment width axis, in meters.
    pub depth: f32,
}

impl Footprint {
    pub fn new(span: f32, depth: f32) -> Self {
        Self { span, depth }
    }
}

impl Default for Footprint {
    fn default() -> Self {
        Self {
            span: 10.0,
            depth: 0.0,
        }
    }
}

/// Partial override bundle selected by a variant name.
///
/// Only non-empty fields are substituted, and only into the first clones
/// declaration of the type.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VariantOverride {
    pub models: Vec<String>,
    pub spacing: Option<f32>,
    pub mode: Option<crate::config::CloneMode>,
    pub position_y: Option<f32>,
    pub surface: Option<String>,
}

impl VariantOverride {
    pub fn with_models(models: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            models: models.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = Some(spacing);
        self
    }
}

/// Template for one segment type: surface styling plus generator declarations.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypeTemplate {
    /// Host-side surface material id.
    pub surface: String,
    /// Host-side surface tint.
    pub color: String,
    /// Elevation level index.
    pub level: i32,
    /// Generator declarations in authoring order.
    pub generated: Vec<GeneratorConfig>,
    /// Variant overrides keyed by variant name.
    pub variants: BTreeMap<String, VariantOverride>,
}

impl TypeTemplate {
    pub fn new(surface: impl Into<String>, color: impl Into<String>, level: i32) -> Self {
        Self {
            surface: surface.into(),
            color: color.into(),
            level,
            generated: Vec::new(),
            variants: BTreeMap::new(),
        }
    }

    pub fn with_generator(mut self, config: GeneratorConfig) -> Self {
        self.generated.push(config);
        self
    }

    pub fn with_variant(mut self, name: impl Into<String>, over: VariantOverride) -> Self {
        self.variants.insert(name.into(), over);
        self
    }
}

/// Immutable table of segment types, variants, and model footprints.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default)]
pub struct TypeRegistry {
    types: BTreeMap<TypeId, TypeTemplate>,
    footprints: BTreeMap<String, Footprint>,
}

pub const COLOR_WHITE: &str = "#ffffff";
pub const COLOR_RED: &str = "#ff9393";
pub const COLOR_GREEN: &str = "#adff83";
pub const COLOR_LIGHT_GRAY: &str = "#dddddd";

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: impl Into<TypeId>, template: TypeTemplate) -> &mut Self {
        self.types.insert(id.into(), template);
        self
    }

    pub fn register_footprint(&mut self, model: impl Into<String>, footprint: Footprint) {
        self.footprints.insert(model.into(), footprint);
    }

    pub fn get(&self, id: &str) -> Option<&TypeTemplate> {
        self.types.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.types.contains_key(id)
    }

    /// Footprint for a model, falling back to the default extent for unknown
    /// models so fit mode always terminates.
    pub fn footprint(&self, model: &str) -> Footprint {
        self.footprints.get(model).copied().unwrap_or_default()
    }

    pub fn type_ids(&self) -> impl Iterator<Item = &TypeId> {
        self.types.keys()
    }

    /// The stock street vocabulary: lanes, sidewalk, parking, rail, building.
    pub fn builtin() -> Self {
        use crate::config::{
            CloneMode, ClonesConfig, Density, PedestriansConfig, RailConfig, StencilConfig,
        };

        let mut registry = Self::new();

        registry.register(
            "drive-lane",
            TypeTemplate::new("asphalt", COLOR_WHITE, 0).with_generator(GeneratorConfig::Clones(
                ClonesConfig::new(
                    CloneMode::Random,
                    [
                        "sedan-rig",
                        "box-truck-rig",
                        "self-driving-waymo-car",
                        "suv-rig",
                        "motorbike",
                    ],
                )
                .with_spacing(7.3)
                .with_count(4),
            )),
        );

        registry.register(
            "bus-lane",
            TypeTemplate::new("asphalt", COLOR_RED, 0)
                .with_generator(GeneratorConfig::Clones(
                    ClonesConfig::new(CloneMode::Random, ["bus"])
                        .with_spacing(15.0)
                        .with_count(1),
                ))
                .with_generator(GeneratorConfig::Stencil(
                    StencilConfig::new(["word-only", "word-taxi", "word-bus"])
                        .with_spacing(40.0)
                        .with_padding(10.0),
                )),
        );

        registry.register(
            "bike-lane",
            TypeTemplate::new("asphalt", COLOR_GREEN, 0)
                .with_generator(GeneratorConfig::Stencil(
                    StencilConfig::new(["bike-arrow"])
                        .with_cycle_offset(0.3)
                        .with_spacing(20.0),
                ))
                .with_generator(GeneratorConfig::Clones(
                    ClonesConfig::new(
                        CloneMode::Random,
                        [
                            "cyclist-cargo",
                            "cyclist1",
                            "cyclist2",
                            "cyclist3",
                            "cyclist-dutch",
                            "cyclist-kid",
                            "ElectricScooter_1",
                        ],
                    )
                    .with_spacing(2.03)
                    .with_count(4),
                )),
        );

        registry.register(
            "sidewalk",
            TypeTemplate::new("sidewalk", COLOR_WHITE, 1).with_generator(
                GeneratorConfig::Pedestrians(PedestriansConfig::new(Density::Normal)),
            ),
        );

        registry.register(
            "parking-lane",
            TypeTemplate::new("concrete", COLOR_LIGHT_GRAY, 0)
                .with_generator(GeneratorConfig::Clones(
                    ClonesConfig::new(
                        CloneMode::Random,
                        ["sedan-rig", "self-driving-waymo-car", "suv-rig"],
                    )
                    .with_spacing(6.0)
                    .with_count(6),
                ))
                .with_generator(GeneratorConfig::Stencil(
                    StencilConfig::new(["parking-t"])
                        .with_cycle_offset(1.0)
                        .with_spacing(6.0),
                )),
        );

        registry.register("divider", TypeTemplate::new("hatched", COLOR_WHITE, 0));
        registry.register("grass", TypeTemplate::new("grass", COLOR_WHITE, -1));

        registry.register(
            "rail",
            TypeTemplate::new("asphalt", COLOR_WHITE, 0)
                .with_generator(GeneratorConfig::Clones(
                    ClonesConfig::new(CloneMode::Random, ["tram"])
                        .with_spacing(15.0)
                        .with_count(2),
                ))
                .with_generator(GeneratorConfig::Rail(RailConfig::new(1435))),
        );

        registry.register(
            "building",
            TypeTemplate::new("cracked-asphalt", COLOR_WHITE, 0)
                .with_generator(GeneratorConfig::Clones(
                    ClonesConfig::new(CloneMode::Fit, Vec::<String>::new()).with_spacing(0.0),
                ))
                .with_variant(
                    "brownstone",
                    VariantOverride::with_models([
                        "SM3D_Bld_Mixed_4fl",
                        "SM3D_Bld_Mixed_Corner_4fl",
                        "SM3D_Bld_Mixed_5fl",
                        "SM3D_Bld_Mixed_4fl_2",
                        "SM3D_Bld_Mixed_Double_5fl",
                    ]),
                )
                .with_variant(
                    "suburban",
                    VariantOverride::with_models([
                        "SM_Bld_House_Preset_03_1800",
                        "SM_Bld_House_Preset_08_1809",
                        "SM_Bld_House_Preset_09_1845",
                    ])
                    .with_spacing(2.0),
                )
                .with_variant(
                    "arcade",
                    VariantOverride::with_models([
                        "arched-building-01",
                        "arched-building-02",
                        "arched-building-03",
                        "arched-building-04",
                    ]),
                )
                .with_variant("water", VariantOverride::default())
                .with_variant("grass", VariantOverride::default())
                .with_variant("parking", VariantOverride::default()),
        );

        for (model, span, depth) in [
            ("SM3D_Bld_Mixed_4fl", 5.251, 6.0),
            ("SM3D_Bld_Mixed_Double_5fl", 10.9041, 6.0),
            ("SM3D_Bld_Mixed_4fl_2", 5.309, 6.0),
            ("SM3D_Bld_Mixed_5fl", 5.903, 6.0),
            ("SM3D_Bld_Mixed_Corner_4fl", 5.644, 6.0),
            ("SM_Bld_House_Preset_03_1800", 20.0, 20.0),
            ("SM_Bld_House_Preset_08_1809", 20.0, 20.0),
            ("SM_Bld_House_Preset_09_1845", 20.0, 20.0),
            ("arched-building-01", 9.191, 10.0),
            ("arched-building-02", 11.19, 10.0),
            ("arched-building-03", 13.191, 10.0),
            ("arched-building-04", 15.191, 10.0),
            ("seawall", 15.0, 0.0),
        ] {
            registry.register_footprint(model, Footprint::new(span, depth));
        }

        registry
    }
}
