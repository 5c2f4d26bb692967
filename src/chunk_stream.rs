//! streaming window – keeps exactly the chunks around the observer resident
//!
//! Each tick the desired square window is diffed against the resident map:
//! chunks that left are released & dropped, chunks that entered are
//! generated, exported and inserted.  Everything runs inline; a chunk is
//! either absent or fully resident.

use std::collections::{HashMap, HashSet};

use bevy::prelude::*;

use crate::chunk::{Chunk, ChunkFactory};
use crate::config::ValidConfig;
use crate::constants::BUSH_CLUSTER_DISTANCE;
use crate::coords::ChunkCoord;
use crate::error::ExportError;
use crate::surface::ChunkPresenter;
use crate::vegetation::VegetationKind;

/// What one tick changed.
#[derive(Debug, Default, PartialEq)]
pub struct WindowDelta {
    /// chunks that entered the window this tick
    pub generated: Vec<ChunkCoord>,
    /// chunks that left the window this tick
    pub evicted: Vec<ChunkCoord>,
    /// chunks that are resident but whose surface export failed
    pub export_failures: Vec<ExportError>,
}

impl WindowDelta {
    pub fn is_empty(&self) -> bool {
        self.generated.is_empty() && self.evicted.is_empty() && self.export_failures.is_empty()
    }
}

/// A tree or bush someone may hide under.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowAnchor {
    pub position: Vec3,
    pub kind: VegetationKind,
}

/// Owner of the resident chunk map (single writer).
#[derive(Resource)]
pub struct StreamingWindow {
    config: ValidConfig,
    factory: ChunkFactory,
    center: Option<ChunkCoord>,
    resident: HashMap<ChunkCoord, Chunk>,
}

impl StreamingWindow {
    pub fn new(config: ValidConfig) -> Self {
        Self {
            factory: ChunkFactory::new(&config),
            resident: HashMap::with_capacity(config.window_len()),
            center: None,
            config,
        }
    }

    pub fn config(&self) -> &ValidConfig {
        &self.config
    }

    /// chunk the observer stood in at the last tick
    pub fn center(&self) -> Option<ChunkCoord> {
        self.center
    }

    /// Coordinates that should be resident for an observer in `center`.
    pub fn desired(&self, center: ChunkCoord) -> impl Iterator<Item = ChunkCoord> {
        center.window(self.config.view_distance)
    }

    /// Advance one tick for an observer at `observer` (world space).
    pub fn update<P: ChunkPresenter>(&mut self, observer: Vec3, presenter: &mut P) -> WindowDelta {
        let center = ChunkCoord::from_world(observer.x, observer.z, self.config.chunk_size);

        if self.center == Some(center) && self.resident.len() == self.config.window_len() {
            return WindowDelta::default();
        }
        if self.center != Some(center) {
            info!("observer entered chunk {center}");
        }
        self.center = Some(center);

        let desired: HashSet<ChunkCoord> = self.desired(center).collect();
        let mut delta = WindowDelta::default();

        /* chunks leaving view ------------------------------------------------ */
        let leaving: Vec<ChunkCoord> = self
            .resident
            .keys()
            .filter(|c| !desired.contains(c))
            .copied()
            .collect();
        for coord in leaving {
            let Some(mut chunk) = self.resident.remove(&coord) else {
                continue;
            };
            if let Some(handle) = chunk.take_surface() {
                presenter.release(coord, handle);
            }
            debug!("evicted chunk {coord}");
            delta.evicted.push(coord);
        }

        /* chunks entering view (row‑major) ----------------------------------- */
        for coord in self.desired(center) {
            if self.resident.contains_key(&coord) {
                continue;
            }
            let mut chunk = self.factory.generate(coord);
            match presenter.export(&chunk) {
                Ok(handle) => chunk.attach_surface(handle),
                Err(err) => {
                    warn!("{err}; chunk {coord} stays resident without a surface");
                    delta.export_failures.push(err);
                }
            }
            debug!(
                "generated chunk {coord} with {} vegetation instances",
                chunk.vegetation().len()
            );
            self.resident.insert(coord, chunk);
            delta.generated.push(coord);
        }

        if !delta.is_empty() {
            info!(
                "window at {center}: +{} -{} ({} resident)",
                delta.generated.len(),
                delta.evicted.len(),
                self.resident.len()
            );
        }
        delta
    }

    /// Release every exported surface and drop all chunks.
    pub fn clear<P: ChunkPresenter>(&mut self, presenter: &mut P) {
        for (coord, mut chunk) in self.resident.drain() {
            if let Some(handle) = chunk.take_surface() {
                presenter.release(coord, handle);
            }
        }
        self.center = None;
    }

    /* ===========================================================
       read‑only queries
       =========================================================== */

    pub fn len(&self) -> usize {
        self.resident.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resident.is_empty()
    }

    pub fn get(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.resident.get(&coord)
    }

    pub fn contains(&self, coord: ChunkCoord) -> bool {
        self.resident.contains_key(&coord)
    }

    pub fn resident_coords(&self) -> impl Iterator<Item = ChunkCoord> + '_ {
        self.resident.keys().copied()
    }

    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.resident.values()
    }

    /// terrain elevation at any world position, resident or not
    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        self.factory.synth().height(x as f64, z as f64)
    }

    /// Vegetation within `radius` of `pos` on the ground plane, taken from
    /// resident chunks only.
    pub fn vegetation_near(&self, pos: Vec3, radius: f32) -> Vec<ShadowAnchor> {
        let size = self.config.chunk_size as f32;
        // cluster bushes may sit slightly outside their owning chunk
        let reach = radius + BUSH_CLUSTER_DISTANCE.end;
        let center = Vec2::new(pos.x, pos.z);
        let radius_sq = radius * radius;

        let mut out = Vec::new();
        for chunk in self.resident.values() {
            let origin = chunk.origin();
            let min = Vec2::new(origin.x, origin.z) - Vec2::splat(reach);
            let max = Vec2::new(origin.x, origin.z) + Vec2::splat(size + reach);
            if center.cmplt(min).any() || center.cmpgt(max).any() {
                continue;
            }
            for v in chunk.vegetation() {
                let p = v.world_position(origin);
                if Vec2::new(p.x, p.z).distance_squared(center) <= radius_sq {
                    out.push(ShadowAnchor { position: p, kind: v.kind });
                }
            }
        }
        out
    }

    /// World positions of trees & bushes near `pos` (resident chunks only).
    pub fn vegetation_positions_near(&self, pos: Vec3, radius: f32) -> Vec<Vec3> {
        self.vegetation_near(pos, radius)
            .into_iter()
            .map(|a| a.position)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::SurfaceHandle;
    use crate::config::WorldConfig;

    /// hands out fresh handles, never fails
    #[derive(Default)]
    struct Counter {
        next: u32,
        released: Vec<ChunkCoord>,
    }

    impl ChunkPresenter for Counter {
        fn export(&mut self, _chunk: &Chunk) -> Result<SurfaceHandle, ExportError> {
            self.next += 1;
            Ok(SurfaceHandle(Entity::from_raw(self.next)))
        }

        fn release(&mut self, coord: ChunkCoord, _handle: SurfaceHandle) {
            self.released.push(coord);
        }
    }

    fn window(view_distance: u32) -> StreamingWindow {
        let cfg = WorldConfig {
            view_distance,
            ..WorldConfig::default()
        };
        StreamingWindow::new(cfg.validated().unwrap())
    }

    #[test]
    fn first_tick_fills_the_window() {
        let mut w = window(1);
        let mut p = Counter::default();
        let delta = w.update(Vec3::new(-1.0, 4.0, 40.0), &mut p);
        assert_eq!(w.center(), Some(ChunkCoord::new(-1, 1)));
        assert_eq!(delta.generated.len(), 9);
        assert!(delta.evicted.is_empty());
        assert!(w.contains(ChunkCoord::new(-2, 0)));
        assert!(w.contains(ChunkCoord::new(0, 2)));
    }

    #[test]
    fn standing_still_is_a_no_op() {
        let mut w = window(2);
        let mut p = Counter::default();
        w.update(Vec3::ZERO, &mut p);
        let delta = w.update(Vec3::new(5.0, 0.0, 31.0), &mut p);
        assert!(delta.is_empty());
        assert_eq!(p.next, 25);
    }

    #[test]
    fn clear_releases_everything() {
        let mut w = window(1);
        let mut p = Counter::default();
        w.update(Vec3::ZERO, &mut p);
        w.clear(&mut p);
        assert!(w.is_empty());
        assert_eq!(p.released.len(), 9);
        assert_eq!(w.center(), None);
    }

    #[test]
    fn queries_only_see_resident_chunks() {
        let mut w = window(1);
        let mut p = Counter::default();
        w.update(Vec3::ZERO, &mut p);

        let everything = w.vegetation_near(Vec3::ZERO, 10_000.0);
        let total: usize = w.chunks().map(|c| c.vegetation().len()).sum();
        assert_eq!(everything.len(), total);

        // far outside the window nothing is reported
        assert!(w.vegetation_positions_near(Vec3::new(5_000.0, 0.0, 0.0), 50.0).is_empty());
    }

    #[test]
    fn query_radius_is_inclusive_on_the_ground_plane() {
        let mut w = window(1);
        let mut p = Counter::default();
        w.update(Vec3::ZERO, &mut p);

        let Some(anchor) = w.vegetation_near(Vec3::ZERO, 10_000.0).into_iter().next() else {
            return;
        };
        // height is ignored, distance 0 on xz
        let above = anchor.position + Vec3::Y * 100.0;
        let near = w.vegetation_positions_near(above, 0.0);
        assert!(near.contains(&anchor.position));
    }

    #[test]
    fn height_at_matches_chunk_samples() {
        let mut w = window(1);
        let mut p = Counter::default();
        w.update(Vec3::ZERO, &mut p);
        let chunk = w.get(ChunkCoord::new(-1, 0)).unwrap();
        assert_eq!(w.height_at(-32.0 + 4.0, 9.0), chunk.heights().get(4, 9));
    }
}
