//! 3D globe rendering: sphere meshes, pipelines, scene state and picking.

pub mod mesh;
pub mod orbit_cam;
pub mod picker;
pub mod pipeline;
pub mod scene;

pub use mesh::{build_sphere_geometry, MarkerInstance, SphereGeometry, SphereMesh};
pub use orbit_cam::OrbitCamera;
pub use picker::MarkerHit;
pub use pipeline::{FrameParams, GlobeRenderer, SceneLighting, SceneTarget};
pub use scene::GlobeScene;
