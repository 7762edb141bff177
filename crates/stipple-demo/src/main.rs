use anyhow::Result;

use stipple::input::GameKey;
use stipple::logging::{init_logging, LoggingConfig};
use stipple::raster::geometry::SMOOTH_SIDES;
use stipple::render::PrimitiveRenderer;
use stipple::{Canvas, Color, Surface, SurfaceConfig};

/// Pixels per second the player circle moves while a direction key is held.
const PLAYER_SPEED: f32 = 240.0;
const PLAYER_RADIUS: f32 = 18.0;

struct Player {
    x: f32,
    y: f32,
}

impl Player {
    fn step(&mut self, key: Option<GameKey>, dt: f32, (w, h): (u32, u32)) {
        let d = PLAYER_SPEED * dt;
        match key {
            Some(GameKey::W) => self.y += d,
            Some(GameKey::S) => self.y -= d,
            Some(GameKey::A) => self.x -= d,
            Some(GameKey::D) => self.x += d,
            _ => {}
        }
        self.x = self.x.clamp(PLAYER_RADIUS, (w as f32 - PLAYER_RADIUS).max(PLAYER_RADIUS));
        self.y = self.y.clamp(PLAYER_RADIUS, (h as f32 - PLAYER_RADIUS).max(PLAYER_RADIUS));
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut surface = Surface::open(SurfaceConfig {
        title: "stipple demo".to_string(),
        width: 960,
        height: 540,
        clear_color: Color::from_packed(0x101820),
        ..SurfaceConfig::default()
    })?;

    let (w, h) = surface.size();
    let mut player = Player { x: w as f32 / 2.0, y: h as f32 / 2.0 };

    log::info!("WASD / arrows move, ESC or X quits");

    while !surface.is_closing() {
        surface.poll_events();

        let key = surface.poll_key();
        if matches!(key, Some(GameKey::Escape | GameKey::X)) {
            log::info!("quit key {:?} (0x{:02X})", key, key.map_or(0, GameKey::ascii));
            break;
        }

        let dt = surface.frame_time().map_or(0.0, |ft| ft.dt);
        let size = surface.size();
        player.step(key, dt, size);

        let t = surface.time();
        let fps = if dt > 0.0 { 1.0 / dt } else { 0.0 };
        draw_scene(surface.canvas(), size, &player, t, fps)?;

        surface.swap_buffers()?;
    }

    surface.shutdown();
    Ok(())
}

fn draw_scene(
    canvas: &mut Canvas<PrimitiveRenderer>,
    (w, h): (u32, u32),
    player: &Player,
    t: f64,
    fps: f32,
) -> Result<()> {
    let (w, h) = (w as f32, h as f32);

    // Ground strip and a sliding block.
    canvas.draw_quad(0.0, 0.0, w, 40.0, 0x2E4A3A);
    let slide = ((t * 0.5).sin() as f32 * 0.5 + 0.5) * (w - 120.0);
    canvas.draw_quad(slide, 48.0, 120.0, 24.0, 0xCC8833);

    // Grid lines, alternating smoothing.
    for i in 1..8 {
        let x = w * i as f32 / 8.0;
        canvas.draw_line(x, 80.0, x, h - 60.0, 1.0, 0x2A3440, i % 2 == 0);
    }
    canvas.draw_line(20.0, 80.0, w - 20.0, h - 60.0, 3.0, Color::CYAN, true);

    // Star field as points.
    for i in 0..24u32 {
        let px = (i * 97 % 100) as f32 / 100.0 * w;
        let py = 80.0 + (i * 53 % 100) as f32 / 100.0 * (h - 140.0);
        let size = 1.0 + (i % 4) as f32;
        canvas.draw_point(px, py, size, Color::WHITE, i % 2 == 0);
    }

    // Polygons of increasing side count.
    for (i, sides) in [3u32, 4, 6, 12].into_iter().enumerate() {
        let cx = 60.0 + i as f32 * 70.0;
        canvas.draw_circle(cx, h - 110.0, 24.0, Color::MAGENTA, sides)?;
    }

    canvas.draw_circle(player.x, player.y, PLAYER_RADIUS, Color::YELLOW, SMOOTH_SIDES)?;

    canvas.draw_text(10.0, h - 30.0, &format!("T {t:7.2}s"), 2, Color::GREEN)?;
    canvas.draw_text(10.0, h - 50.0, &format!("FPS {fps:5.0}"), 1, Color::WHITE)?;
    canvas.draw_text(w - 200.0, 12.0, "WASD/ESC", 2, 0xFFFFFF)?;

    Ok(())
}
