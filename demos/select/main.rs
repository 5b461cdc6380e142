//! Face grouping walkthrough on a unit cube.
//!
//! Usage:
//! ```text
//! cargo run --example select                 # anchor bottom, load top
//! RUST_LOG=facegroup=debug cargo run --example select
//! ```

use facegroup::math::Point3;
use facegroup::mesh::TriangleMesh;
use facegroup::operations::extraction::{FlattenMesh, PickFace};
use facegroup::operations::grouping::Detessellate;
use facegroup::selection::{SelectionMode, SelectionSession};
use facegroup::topology::FaceStore;
use facegroup::Result;
use tracing::info;

/// Unit cube with outward windings, two triangles per side.
fn cube() -> TriangleMesh {
    let v = |x: f64, y: f64, z: f64| Point3::new(x, y, z);
    TriangleMesh::new(
        vec![
            v(0.0, 0.0, 0.0),
            v(1.0, 0.0, 0.0),
            v(1.0, 1.0, 0.0),
            v(0.0, 1.0, 0.0),
            v(0.0, 0.0, 1.0),
            v(1.0, 0.0, 1.0),
            v(1.0, 1.0, 1.0),
            v(0.0, 1.0, 1.0),
        ],
        vec![
            // bottom
            [0, 2, 1],
            [0, 3, 2],
            // top
            [4, 5, 6],
            [4, 6, 7],
            // front
            [0, 1, 5],
            [0, 5, 4],
            // back
            [3, 6, 2],
            [3, 7, 6],
            // left
            [0, 4, 7],
            [0, 7, 3],
            // right
            [1, 2, 6],
            [1, 6, 5],
        ],
    )
}

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for this demo and facegroup.
    // Override with RUST_LOG env var (e.g. RUST_LOG=facegroup=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("select=info".parse().unwrap_or_default())
        .add_directive("facegroup=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mesh = cube();
    let mut store = FaceStore::new();
    FlattenMesh::new(&mesh).execute(&mut store)?;

    let groups = Detessellate::all(&store).execute(&store)?;
    for (i, group) in groups.iter().enumerate() {
        info!(
            group = i,
            faces = group.len(),
            normal = ?group.normal,
            center = ?group.center(),
            area = group.area(&store)?,
            "planar region"
        );
    }

    // Host-side picks arrive as triangle indices into the input mesh.
    let bottom = PickFace::new(&mesh, 1).execute(&mut store)?;
    let top = PickFace::new(&mesh, 2).execute(&mut store)?;

    let mut session = SelectionSession::new();
    session.set_mode(SelectionMode::Anchor);
    let anchored = session.select(&store, bottom)?.len();
    session.set_mode(SelectionMode::Load);
    let loaded = session.select(&store, top)?.len();
    session.clear();

    info!(anchored, loaded, load = ?session.load_vector(&store)?, "boundary conditions");
    Ok(())
}
