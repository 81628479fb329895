//! Wire-level scene model shared between the editor core and its
//! collaborators (renderer, persistence service, import pipeline).
//!
//! Field names follow the persisted scene-document layout (camelCase JSON),
//! so `SceneFile` round-trips against documents produced by older clients.

use serde::{Deserialize, Serialize};

/// Unique identifier of an object in the scene.
///
/// Assigned once at creation by the editor session and never reused,
/// even across undo of the creating action.
pub type ObjectId = u64;

/// Axis-aligned bounds metadata carried by imported meshes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub min: [f64; 3],
    pub max: [f64; 3],
    pub center: [f64; 3],
    pub size: [f64; 3],
}

impl BoundingBox {
    /// Bounds computed from min/max corners.
    pub fn from_min_max(min: [f64; 3], max: [f64; 3]) -> Self {
        let center = [
            (min[0] + max[0]) * 0.5,
            (min[1] + max[1]) * 0.5,
            (min[2] + max[2]) * 0.5,
        ];
        let size = [max[0] - min[0], max[1] - min[1], max[2] - min[2]];
        Self {
            min,
            max,
            center,
            size,
        }
    }
}

/// Opaque handle to a loaded mesh resource owned by the rendering
/// collaborator. The editor core never dereferences it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeshHandle(pub u64);

/// Which faces a material renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialSide {
    Front,
    Back,
    #[default]
    Double,
}

/// Full PBR material record attached to shapes and imported meshes.
///
/// Defaults mirror what the original save path writes for a freshly
/// created object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Material {
    pub color: String,
    pub emissive: String,
    pub metalness: f64,
    pub roughness: f64,
    pub opacity: f64,
    pub reflectivity: f64,
    pub shininess: f64,
    pub transmission: f64,
    pub clearcoat: f64,
    pub clearcoat_roughness: f64,
    pub sheen: f64,
    pub sheen_roughness: f64,
    pub ior: f64,
    pub thickness: f64,
    pub wireframe: bool,
    pub flat_shading: bool,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
    pub side: MaterialSide,
    /// Base64 PNG payload embedded in the scene document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texture: Option<String>,
    /// Base64 PNG payload embedded in the scene document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal_map: Option<String>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: "#ffffff".to_string(),
            emissive: "#000000".to_string(),
            metalness: 0.0,
            roughness: 0.5,
            opacity: 1.0,
            reflectivity: 0.0,
            shininess: 30.0,
            transmission: 0.0,
            clearcoat: 0.0,
            clearcoat_roughness: 0.0,
            sheen: 0.0,
            sheen_roughness: 0.0,
            ior: 1.5,
            thickness: 0.0,
            wireframe: false,
            flat_shading: false,
            cast_shadow: false,
            receive_shadow: false,
            side: MaterialSide::Double,
            texture: None,
            normal_map: None,
        }
    }
}

/// Partial material edit. Only set fields overwrite; everything else
/// keeps its prior value (shallow merge at the material-field level).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaterialPatch {
    pub color: Option<String>,
    pub emissive: Option<String>,
    pub metalness: Option<f64>,
    pub roughness: Option<f64>,
    pub opacity: Option<f64>,
    pub reflectivity: Option<f64>,
    pub shininess: Option<f64>,
    pub transmission: Option<f64>,
    pub clearcoat: Option<f64>,
    pub clearcoat_roughness: Option<f64>,
    pub sheen: Option<f64>,
    pub sheen_roughness: Option<f64>,
    pub ior: Option<f64>,
    pub thickness: Option<f64>,
    pub wireframe: Option<bool>,
    pub flat_shading: Option<bool>,
    pub cast_shadow: Option<bool>,
    pub receive_shadow: Option<bool>,
    pub side: Option<MaterialSide>,
    pub texture: Option<String>,
    pub normal_map: Option<String>,
}

impl Material {
    /// Shallow-merge a partial edit into this material.
    pub fn merge(&mut self, patch: &MaterialPatch) {
        if let Some(v) = &patch.color {
            self.color = v.clone();
        }
        if let Some(v) = &patch.emissive {
            self.emissive = v.clone();
        }
        if let Some(v) = patch.metalness {
            self.metalness = v;
        }
        if let Some(v) = patch.roughness {
            self.roughness = v;
        }
        if let Some(v) = patch.opacity {
            self.opacity = v;
        }
        if let Some(v) = patch.reflectivity {
            self.reflectivity = v;
        }
        if let Some(v) = patch.shininess {
            self.shininess = v;
        }
        if let Some(v) = patch.transmission {
            self.transmission = v;
        }
        if let Some(v) = patch.clearcoat {
            self.clearcoat = v;
        }
        if let Some(v) = patch.clearcoat_roughness {
            self.clearcoat_roughness = v;
        }
        if let Some(v) = patch.sheen {
            self.sheen = v;
        }
        if let Some(v) = patch.sheen_roughness {
            self.sheen_roughness = v;
        }
        if let Some(v) = patch.ior {
            self.ior = v;
        }
        if let Some(v) = patch.thickness {
            self.thickness = v;
        }
        if let Some(v) = patch.wireframe {
            self.wireframe = v;
        }
        if let Some(v) = patch.flat_shading {
            self.flat_shading = v;
        }
        if let Some(v) = patch.cast_shadow {
            self.cast_shadow = v;
        }
        if let Some(v) = patch.receive_shadow {
            self.receive_shadow = v;
        }
        if let Some(v) = patch.side {
            self.side = v;
        }
        if let Some(v) = &patch.texture {
            self.texture = Some(v.clone());
        }
        if let Some(v) = &patch.normal_map {
            self.normal_map = Some(v.clone());
        }
    }
}

/// Primitive shapes the toolbar can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShapeKind {
    Cube,
    Sphere,
    Cylinder,
    Cone,
    Torus,
    Plane,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Cube,
        ShapeKind::Sphere,
        ShapeKind::Cylinder,
        ShapeKind::Cone,
        ShapeKind::Torus,
        ShapeKind::Plane,
    ];
}

/// Light sources the toolbar can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LightKind {
    PointLight,
    SpotLight,
    DirectionalLight,
}

impl LightKind {
    pub const ALL: [LightKind; 3] = [
        LightKind::PointLight,
        LightKind::SpotLight,
        LightKind::DirectionalLight,
    ];

    /// Name used in display ids, matching the document's `type` tag.
    pub fn tag(&self) -> &'static str {
        match self {
            LightKind::PointLight => "pointLight",
            LightKind::SpotLight => "spotLight",
            LightKind::DirectionalLight => "directionalLight",
        }
    }
}

/// Type-specific payload of a scene object, discriminated by the
/// document's `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ObjectKind {
    Cube,
    Sphere,
    Cylinder,
    Cone,
    Torus,
    Plane,
    PointLight {
        color: String,
        intensity: f64,
    },
    SpotLight {
        color: String,
        intensity: f64,
        angle: f64,
        penumbra: f64,
        distance: f64,
        decay: f64,
        target: [f64; 3],
    },
    DirectionalLight {
        color: String,
        intensity: f64,
        target: [f64; 3],
    },
    ImportedMesh {
        mesh: MeshHandle,
        bounding_box: BoundingBox,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        original_file_name: Option<String>,
    },
}

/// Broad classification used by switch sites (material editing, light
/// helper creation, export).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectCategory {
    Shape,
    Light,
    Imported,
}

impl ObjectKind {
    /// The document `type` tag for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            ObjectKind::Cube => "cube",
            ObjectKind::Sphere => "sphere",
            ObjectKind::Cylinder => "cylinder",
            ObjectKind::Cone => "cone",
            ObjectKind::Torus => "torus",
            ObjectKind::Plane => "plane",
            ObjectKind::PointLight { .. } => "pointLight",
            ObjectKind::SpotLight { .. } => "spotLight",
            ObjectKind::DirectionalLight { .. } => "directionalLight",
            ObjectKind::ImportedMesh { .. } => "importedMesh",
        }
    }

    pub fn category(&self) -> ObjectCategory {
        match self {
            ObjectKind::Cube
            | ObjectKind::Sphere
            | ObjectKind::Cylinder
            | ObjectKind::Cone
            | ObjectKind::Torus
            | ObjectKind::Plane => ObjectCategory::Shape,
            ObjectKind::PointLight { .. }
            | ObjectKind::SpotLight { .. }
            | ObjectKind::DirectionalLight { .. } => ObjectCategory::Light,
            ObjectKind::ImportedMesh { .. } => ObjectCategory::Imported,
        }
    }

    pub fn is_light(&self) -> bool {
        self.category() == ObjectCategory::Light
    }
}

impl From<ShapeKind> for ObjectKind {
    fn from(shape: ShapeKind) -> Self {
        match shape {
            ShapeKind::Cube => ObjectKind::Cube,
            ShapeKind::Sphere => ObjectKind::Sphere,
            ShapeKind::Cylinder => ObjectKind::Cylinder,
            ShapeKind::Cone => ObjectKind::Cone,
            ShapeKind::Torus => ObjectKind::Torus,
            ShapeKind::Plane => ObjectKind::Plane,
        }
    }
}

impl From<LightKind> for ObjectKind {
    /// Light payload with the stock defaults a toolbar placement uses.
    fn from(light: LightKind) -> Self {
        match light {
            LightKind::PointLight => ObjectKind::PointLight {
                color: "#ffffff".to_string(),
                intensity: 1.0,
            },
            LightKind::SpotLight => ObjectKind::SpotLight {
                color: "#ffffff".to_string(),
                intensity: 1.0,
                angle: std::f64::consts::FRAC_PI_6,
                penumbra: 0.1,
                distance: 0.0,
                decay: 2.0,
                target: [0.0, 0.0, 0.0],
            },
            LightKind::DirectionalLight => ObjectKind::DirectionalLight {
                color: "#ffffff".to_string(),
                intensity: 1.0,
                target: [0.0, 0.0, 0.0],
            },
        }
    }
}

/// One placed entity in the scene: shape, light, or imported mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneObject {
    pub id: ObjectId,
    /// User-facing name shown in the hierarchy panel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_id: Option<String>,
    pub position: [f64; 3],
    pub rotation: [f64; 3],
    pub scale: [f64; 3],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<Material>,
    /// Reserved for grouping; the mutation layer never populates it.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SceneObject>,
    #[serde(flatten)]
    pub kind: ObjectKind,
}

impl SceneObject {
    /// A shape at the origin with the stock material.
    pub fn shape(id: ObjectId, kind: ShapeKind) -> Self {
        Self {
            id,
            display_id: None,
            position: [0.0, 0.0, 0.0],
            rotation: [0.0, 0.0, 0.0],
            scale: [1.0, 1.0, 1.0],
            material: Some(Material::default()),
            children: Vec::new(),
            kind: kind.into(),
        }
    }

    /// A light at the stock placement position, named after its kind.
    pub fn light(id: ObjectId, kind: LightKind) -> Self {
        Self {
            id,
            display_id: Some(format!("{} {}", kind.tag(), id)),
            position: [1.0, 3.0, 2.0],
            rotation: [0.0, 0.0, 0.0],
            scale: [1.0, 1.0, 1.0],
            material: None,
            children: Vec::new(),
            kind: kind.into(),
        }
    }

    /// Shallow-merge a partial edit into this object.
    ///
    /// `material` merges field-wise rather than replacing wholesale, so a
    /// color-only edit keeps roughness and friends. Light parameters only
    /// apply to the matching light kinds and are otherwise dropped.
    pub fn apply(&mut self, patch: &SceneObjectPatch) {
        if let Some(v) = &patch.display_id {
            self.display_id = Some(v.clone());
        }
        if let Some(v) = patch.position {
            self.position = v;
        }
        if let Some(v) = patch.rotation {
            self.rotation = v;
        }
        if let Some(v) = patch.scale {
            self.scale = v;
        }
        if let Some(mp) = &patch.material {
            if !self.kind.is_light() {
                self.material.get_or_insert_with(Material::default).merge(mp);
            }
        }
        match &mut self.kind {
            ObjectKind::PointLight { color, intensity } => {
                if let Some(v) = &patch.color {
                    *color = v.clone();
                }
                if let Some(v) = patch.intensity {
                    *intensity = v;
                }
            }
            ObjectKind::SpotLight {
                color,
                intensity,
                angle,
                penumbra,
                distance,
                decay,
                target,
            } => {
                if let Some(v) = &patch.color {
                    *color = v.clone();
                }
                if let Some(v) = patch.intensity {
                    *intensity = v;
                }
                if let Some(v) = patch.angle {
                    *angle = v;
                }
                if let Some(v) = patch.penumbra {
                    *penumbra = v;
                }
                if let Some(v) = patch.distance {
                    *distance = v;
                }
                if let Some(v) = patch.decay {
                    *decay = v;
                }
                if let Some(v) = patch.target {
                    *target = v;
                }
            }
            ObjectKind::DirectionalLight {
                color,
                intensity,
                target,
            } => {
                if let Some(v) = &patch.color {
                    *color = v.clone();
                }
                if let Some(v) = patch.intensity {
                    *intensity = v;
                }
                if let Some(v) = patch.target {
                    *target = v;
                }
            }
            ObjectKind::Cube
            | ObjectKind::Sphere
            | ObjectKind::Cylinder
            | ObjectKind::Cone
            | ObjectKind::Torus
            | ObjectKind::Plane
            | ObjectKind::ImportedMesh { .. } => {}
        }
    }
}

/// Partial object edit sent by the properties panel or command protocol.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SceneObjectPatch {
    pub display_id: Option<String>,
    pub position: Option<[f64; 3]>,
    pub rotation: Option<[f64; 3]>,
    pub scale: Option<[f64; 3]>,
    pub material: Option<MaterialPatch>,
    pub color: Option<String>,
    pub intensity: Option<f64>,
    pub angle: Option<f64>,
    pub penumbra: Option<f64>,
    pub distance: Option<f64>,
    pub decay: Option<f64>,
    pub target: Option<[f64; 3]>,
}

/// Global scene parameters. Exactly one instance exists per session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SceneSettings {
    pub background_color: String,
    pub effects_enabled: bool,
    pub fog_enabled: bool,
    pub fog_color: String,
    pub fog_near: f64,
    pub fog_far: f64,
    pub ambient_shadows_enabled: bool,
    pub ambient_intensity: f64,
    pub light_color: String,
    pub light_intensity: f64,
    pub light_x: f64,
    pub light_y: f64,
    pub light_z: f64,
    pub light_shadows: bool,
    pub shadow_map_size: u32,
    pub shadow_camera_near: f64,
    pub shadow_camera_far: f64,
    pub shadow_camera_left: f64,
    pub shadow_camera_right: f64,
    pub shadow_camera_top: f64,
    pub shadow_camera_bottom: f64,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            background_color: "#2D2E32".to_string(),
            effects_enabled: false,
            fog_enabled: false,
            fog_color: "#ffffff".to_string(),
            fog_near: 1.0,
            fog_far: 100.0,
            ambient_shadows_enabled: false,
            ambient_intensity: 0.0,
            light_color: "#ffffff".to_string(),
            light_intensity: 5.0,
            light_x: 0.0,
            light_y: 0.0,
            light_z: 0.0,
            light_shadows: false,
            shadow_map_size: 1024,
            shadow_camera_near: 0.1,
            shadow_camera_far: 50.0,
            shadow_camera_left: -10.0,
            shadow_camera_right: 10.0,
            shadow_camera_top: 10.0,
            shadow_camera_bottom: -10.0,
        }
    }
}

/// Partial settings edit from the scene properties panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SceneSettingsPatch {
    pub background_color: Option<String>,
    pub effects_enabled: Option<bool>,
    pub fog_enabled: Option<bool>,
    pub fog_color: Option<String>,
    pub fog_near: Option<f64>,
    pub fog_far: Option<f64>,
    pub ambient_shadows_enabled: Option<bool>,
    pub ambient_intensity: Option<f64>,
    pub light_color: Option<String>,
    pub light_intensity: Option<f64>,
    pub light_x: Option<f64>,
    pub light_y: Option<f64>,
    pub light_z: Option<f64>,
    pub light_shadows: Option<bool>,
    pub shadow_map_size: Option<u32>,
    pub shadow_camera_near: Option<f64>,
    pub shadow_camera_far: Option<f64>,
    pub shadow_camera_left: Option<f64>,
    pub shadow_camera_right: Option<f64>,
    pub shadow_camera_top: Option<f64>,
    pub shadow_camera_bottom: Option<f64>,
}

impl SceneSettings {
    pub fn merge(&mut self, patch: &SceneSettingsPatch) {
        if let Some(v) = &patch.background_color {
            self.background_color = v.clone();
        }
        if let Some(v) = patch.effects_enabled {
            self.effects_enabled = v;
        }
        if let Some(v) = patch.fog_enabled {
            self.fog_enabled = v;
        }
        if let Some(v) = &patch.fog_color {
            self.fog_color = v.clone();
        }
        if let Some(v) = patch.fog_near {
            self.fog_near = v;
        }
        if let Some(v) = patch.fog_far {
            self.fog_far = v;
        }
        if let Some(v) = patch.ambient_shadows_enabled {
            self.ambient_shadows_enabled = v;
        }
        if let Some(v) = patch.ambient_intensity {
            self.ambient_intensity = v;
        }
        if let Some(v) = &patch.light_color {
            self.light_color = v.clone();
        }
        if let Some(v) = patch.light_intensity {
            self.light_intensity = v;
        }
        if let Some(v) = patch.light_x {
            self.light_x = v;
        }
        if let Some(v) = patch.light_y {
            self.light_y = v;
        }
        if let Some(v) = patch.light_z {
            self.light_z = v;
        }
        if let Some(v) = patch.light_shadows {
            self.light_shadows = v;
        }
        if let Some(v) = patch.shadow_map_size {
            self.shadow_map_size = v;
        }
        if let Some(v) = patch.shadow_camera_near {
            self.shadow_camera_near = v;
        }
        if let Some(v) = patch.shadow_camera_far {
            self.shadow_camera_far = v;
        }
        if let Some(v) = patch.shadow_camera_left {
            self.shadow_camera_left = v;
        }
        if let Some(v) = patch.shadow_camera_right {
            self.shadow_camera_right = v;
        }
        if let Some(v) = patch.shadow_camera_top {
            self.shadow_camera_top = v;
        }
        if let Some(v) = patch.shadow_camera_bottom {
            self.shadow_camera_bottom = v;
        }
    }
}

/// The persisted scene document: settings plus the ordered object list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene_name: Option<String>,
    pub scene_settings: SceneSettings,
    pub objects: Vec<SceneObject>,
}
