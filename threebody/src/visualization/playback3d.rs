use bevy::log::LogPlugin;
use bevy::prelude::*;
use tracing::{info, warn};

use crate::simulation::states::NVec3;
use crate::simulation::trajectory::TrajectoryBuffer;

/// Half-extent of the scene in bevy units after normalising the trajectory
const VIEW_RADIUS: f32 = 10.0;

/// Distance of the camera from the origin
const CAMERA_DISTANCE: f32 = 32.0;

/// Trajectory entries advanced per rendered frame, also the trail decimation
const PLAYBACK_STRIDE: usize = 25;

/// Sky blue, lemon chiffon, mint green; keyed by body index
const TRAIL_RGB: [[u8; 3]; 3] = [[0x87, 0xCE, 0xEB], [0xFF, 0xFA, 0xCD], [0x98, 0xFF, 0x98]];

const MARKER_RADIUS: f32 = 0.15;

/// Read-only playback state: the finished trajectory plus a cursor into it
#[derive(Resource)]
struct Playback {
    trajectory: TrajectoryBuffer,
    frame: usize,   // number of entries revealed so far
    center: NVec3,  // world centre of the whole run
    scale: f64,     // sim units -> bevy units
}

impl Playback {
    /// Sim frame is z-up, bevy is y-up: rotate -90 degrees about x
    fn to_world(&self, p: &NVec3) -> Vec3 {
        let q = (p - self.center) * self.scale;
        Vec3::new(q.x as f32, q.z as f32, -q.y as f32)
    }
}

/// Play a finished trajectory back in a window
/// Never touches the simulation; it only reads `trajectory`.
pub fn run_playback(trajectory: TrajectoryBuffer) {
    let Some(bounds) = trajectory.bounds() else {
        warn!("run_playback: trajectory has no finite positions, nothing to show");
        return;
    };

    let extent = bounds.half_range().max();
    let scale = if extent > 0.0 { VIEW_RADIUS as f64 / extent } else { 1.0 };

    info!(
        "run_playback: starting Bevy 3D viewer with {} bodies, {} steps",
        trajectory.body_count(),
        trajectory.len()
    );

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(Playback {
            trajectory,
            frame: 0,
            center: bounds.center(),
            scale,
        })
        // logging is already set up by the binary
        .add_plugins(DefaultPlugins.build().disable::<LogPlugin>())
        .add_systems(Startup, setup_camera)
        .add_systems(Update, (advance_frame, orbit_camera, draw_trails).chain())
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera3dBundle {
        transform: Transform::from_xyz(0.0, 0.0, CAMERA_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
        ..Default::default()
    });
}

fn advance_frame(mut playback: ResMut<Playback>) {
    let len = playback.trajectory.len();
    playback.frame = (playback.frame + PLAYBACK_STRIDE).min(len);
}

/// Slow spin: elevation and azimuth (degrees) grow with the step index
fn orbit_camera(playback: Res<Playback>, mut cameras: Query<&mut Transform, With<Camera3d>>) {
    let step = playback.frame as f32;
    let elev = (5.0 + step * 0.000_25).to_radians();
    let azim = (2.5 + step * 0.000_75).to_radians();

    // Spherical coordinates in the z-up sim frame, mapped like `to_world`
    let dir = Vec3::new(elev.cos() * azim.cos(), elev.sin(), -elev.cos() * azim.sin());

    for mut transform in &mut cameras {
        *transform = Transform::from_translation(dir * CAMERA_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y);
    }
}

fn draw_trails(playback: Res<Playback>, mut gizmos: Gizmos) {
    let frame = playback.frame;
    if frame == 0 {
        return;
    }
    let Some(seen) = playback.trajectory.bounds_until(frame) else {
        return;
    };

    // Projection planes sit slightly inside the box seen so far
    let span = seen.max - seen.min;
    let z_wall = seen.min.z + 0.05 * span.z;
    let y_wall = seen.min.y + 0.01 * span.y;
    let x_wall = seen.min.x + 0.01 * span.x;

    for (i, track) in playback.trajectory.tracks().enumerate() {
        let rgb = TRAIL_RGB[i % TRAIL_RGB.len()];
        let color = Color::srgb_u8(rgb[0], rgb[1], rgb[2]);
        let shadow = Color::srgba_u8(rgb[0], rgb[1], rgb[2], 64);

        // Decimated trail, cut at the first poisoned entry
        let trail: Vec<NVec3> = track[..frame]
            .iter()
            .step_by(PLAYBACK_STRIDE)
            .chain(track.get(frame - 1))
            .take_while(|p| p.iter().all(|c| c.is_finite()))
            .copied()
            .collect();

        let Some(head) = trail.last() else {
            continue;
        };

        gizmos.linestrip(trail.iter().map(|p| playback.to_world(p)), color);
        gizmos.sphere(playback.to_world(head), Quat::IDENTITY, MARKER_RADIUS, color);

        // Wall shadows: floor (z), back (y), left (x)
        gizmos.linestrip(
            trail.iter().map(|p| playback.to_world(&NVec3::new(p.x, p.y, z_wall))),
            shadow,
        );
        gizmos.linestrip(
            trail.iter().map(|p| playback.to_world(&NVec3::new(p.x, y_wall, p.z))),
            shadow,
        );
        gizmos.linestrip(
            trail.iter().map(|p| playback.to_world(&NVec3::new(x_wall, p.y, p.z))),
            shadow,
        );
    }
}
