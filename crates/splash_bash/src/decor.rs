//! Party decorations that move on their own
//!
//! None of these have hitboxes; the scenery obstacles in the arena cover the
//! props players can bump into.

use crate::assets::{AssetCatalog, GameClips};
use crate::config::AnimationConfig;
use splash_engine::animation::{ClipClock, PingPongCatmull, PingPongLerp, Spinner};
use splash_engine::foundation::math::{Transform, Vec3};
use splash_engine::render::{RenderResult, Renderer};

/// Animated props around the arena
#[derive(Debug, Clone)]
pub struct Decorations {
    pinwheel: Transform,
    pinwheel_clock: ClipClock,
    roundabout: Transform,
    roundabout_spin: Spinner,
    blue_balloon: Transform,
    blue_path: PingPongLerp,
    purple_balloon: Transform,
    purple_path: PingPongCatmull,
}

impl Decorations {
    /// Props placed around the playground arena
    pub fn playground(animation: &AnimationConfig) -> Self {
        let unit = Vec3::new(1.0, 1.0, 1.0);
        let blue_path = PingPongLerp::new(
            Vec3::new(-30.0, 32.0, 5.0),
            Vec3::new(-23.0, 32.0, 5.0),
            animation.blue_balloon_rate,
        );
        let purple_path = PingPongCatmull::new(
            [
                Vec3::new(55.0, 3.0, 5.0),
                Vec3::new(42.0, 5.0, 5.0),
                Vec3::new(32.0, -5.0, 5.0),
                Vec3::new(35.0, -10.0, 5.0),
            ],
            animation.purple_balloon_rate,
        );

        Self {
            pinwheel: Transform::from_euler_degrees(Vec3::new(0.0, 20.0, 5.0), Vec3::new(90.0, 0.0, 90.0), unit),
            pinwheel_clock: ClipClock::running(),
            roundabout: Transform::from_euler_degrees(Vec3::new(-5.0, -7.0, 1.0), Vec3::new(90.0, 0.0, 0.0), unit),
            roundabout_spin: Spinner::yaw(animation.roundabout_spin),
            blue_balloon: Transform::from_euler_degrees(blue_path.position(), Vec3::new(90.0, 0.0, 0.0), unit),
            blue_path,
            purple_balloon: Transform::from_euler_degrees(purple_path.position(), Vec3::new(90.0, 0.0, 0.0), unit),
            purple_path,
        }
    }

    /// Advance every prop by `dt`
    pub fn advance(&mut self, dt: f32, clips: &GameClips) {
        self.pinwheel_clock.advance(dt, &clips.pinwheel);
        self.roundabout_spin.apply(&mut self.roundabout, dt);
        self.blue_balloon.position = self.blue_path.advance(dt);
        self.purple_balloon.position = self.purple_path.advance(dt);
    }

    /// Draw every prop
    pub fn draw<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        assets: &AssetCatalog,
        clips: &GameClips,
    ) -> RenderResult<()> {
        if let Some(&mesh) = clips.pinwheel.frame(&self.pinwheel_clock) {
            renderer.draw(mesh, assets.pinwheel.material, &self.pinwheel.to_matrix())?;
        }
        renderer.draw(assets.roundabout.mesh, assets.roundabout.material, &self.roundabout.to_matrix())?;
        renderer.draw(assets.blue_balloon.mesh, assets.blue_balloon.material, &self.blue_balloon.to_matrix())?;
        renderer.draw(
            assets.purple_balloon.mesh,
            assets.purple_balloon.material,
            &self.purple_balloon.to_matrix(),
        )?;
        Ok(())
    }

    /// Blue balloon pose
    pub fn blue_balloon(&self) -> &Transform {
        &self.blue_balloon
    }

    /// Roundabout pose
    pub fn roundabout(&self) -> &Transform {
        &self.roundabout
    }
}
