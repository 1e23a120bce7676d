use lopix::util::FpsCounter;
use lopix::{color, Display, EngineConfig, InputEvent, Key, PixelCanvas, RenderTarget, Sprite};

const CONFIG_PATH: &str = "lopix.json";
const BALL_SIZE: u32 = 12;

/// Apply command line overrides on top of the loaded configuration
fn parse_args(config: &mut EngineConfig) {
    let args: Vec<String> = std::env::args().collect();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--no-vsync" => config.vsync = false,
            "--width" | "-w" => {
                if i + 1 < args.len() {
                    if let Ok(w) = args[i + 1].parse::<u32>() {
                        config.width = w;
                    }
                    i += 1;
                }
            },
            "--height" | "-h" => {
                if i + 1 < args.len() {
                    if let Ok(h) = args[i + 1].parse::<u32>() {
                        config.height = h;
                    }
                    i += 1;
                }
            },
            "--scale" | "-s" => {
                if i + 1 < args.len() {
                    if let Ok(s) = args[i + 1].parse::<u32>() {
                        config.scale = s;
                    }
                    i += 1;
                }
            },
            "--help" => {
                println!("Usage: lopix [OPTIONS]");
                println!();
                println!("Options:");
                println!("  --width W, -w W       Canvas width in logical pixels");
                println!("  --height H, -h H      Canvas height in logical pixels");
                println!("  --scale S, -s S       Integer up-scale factor");
                println!("  --no-vsync            Disable VSync for uncapped framerate");
                println!("  --help                Show this help message");
                std::process::exit(0);
            },
            _ => {},
        }
        i += 1;
    }
}

/// Procedurally shaded ball sprite - opaque disc, transparent corners
fn make_ball_sprite(diameter: u32) -> Sprite {
    let size = diameter as i32;
    let r = diameter as f32 / 2.0;
    let mut pixels = vec![color::TRANSPARENT; (diameter * diameter) as usize];

    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - r;
            let dy = y as f32 + 0.5 - r;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist >= r {
                continue;
            }

            let shade = 1.0 - (dist / r) * 0.5;
            // Small specular dot offset toward the upper left
            let hx = dx + r * 0.35;
            let hy = dy + r * 0.35;
            let highlight = if (hx * hx + hy * hy).sqrt() < r * 0.3 {
                70
            } else {
                0
            };

            let red = ((210.0 * shade) as u32 + highlight).min(255);
            let green = ((50.0 * shade) as u32 + highlight).min(255);
            let blue = ((50.0 * shade) as u32 + highlight).min(255);
            pixels[(y * size + x) as usize] = 0xFF000000 | red << 16 | green << 8 | blue;
        }
    }

    Sprite::from_pixels(pixels, diameter, diameter)
}

/// Night scene exercising every primitive: clear, circles, polygon fill,
/// rect fill, lines, rect outline
fn draw_backdrop(canvas: &mut PixelCanvas) {
    let w = canvas.width() as i32;
    let h = canvas.height() as i32;
    let horizon = h * 2 / 3;

    canvas.clear(0xFF1A2238);

    // Moon with a translucent halo ring
    let moon_x = w - w / 5;
    let moon_y = h / 5;
    canvas.fill_circle(moon_x, moon_y, h / 10, 0xFFF5E9B8);
    canvas.draw_circle(moon_x, moon_y, h / 10 + 2, 0x40F5E9B8);

    // Mountain ridge down to the horizon
    let ridge = [
        0,
        horizon,
        w / 4,
        h / 2,
        w / 2,
        horizon - 4,
        w * 3 / 4,
        h / 2 + 6,
        w,
        horizon,
    ];
    canvas
        .fill_polygon(&ridge, 0xFF2E3A59)
        .expect("ridge vertices form a valid polygon");

    // Ground plane and horizon highlight
    canvas.fill_rect(0, horizon, w, h - horizon, 0xFF33402E);
    canvas.draw_line(0, horizon, w - 1, horizon, 0xFF55684A);

    // Subtle frame around the whole canvas
    canvas.draw_rect(0, 0, w, h, 0x30FFFFFF);
}

fn main() -> Result<(), String> {
    let mut config = EngineConfig::load(CONFIG_PATH).unwrap_or_else(|_| EngineConfig::default());
    parse_args(&mut config);

    println!("=== lopix demo ===");
    println!(
        "Canvas: {}x{} at {}x scale ({}x{} window)",
        config.width,
        config.height,
        config.scale,
        config.width * config.scale,
        config.height * config.scale
    );
    println!("Arrows steer, Space stops, F toggles FPS, Escape quits");

    let mut canvas = PixelCanvas::new(config.width, config.height, config.scale)
        .map_err(|e| e.to_string())?;
    let (mut display, texture_creator) = Display::for_canvas(&config.title, &canvas, config.vsync)?;
    let mut target = RenderTarget::for_canvas(&texture_creator, &canvas)?;

    let ball = make_ball_sprite(BALL_SIZE);
    let size = BALL_SIZE as i32;
    let mut ball_x = 4;
    let mut ball_y = 4;
    let mut vx: i32 = 1;
    let mut vy: i32 = 1;

    let mut fps_counter = FpsCounter::new(60);
    let mut show_fps = false;
    let mut frame: u64 = 0;

    let mut running = true;
    while running {
        for event in display.poll_events() {
            match event {
                InputEvent::Quit | InputEvent::KeyDown(Key::Escape) => running = false,
                InputEvent::KeyDown(Key::Left) => vx = -1,
                InputEvent::KeyDown(Key::Right) => vx = 1,
                InputEvent::KeyDown(Key::Up) => vy = -1,
                InputEvent::KeyDown(Key::Down) => vy = 1,
                InputEvent::KeyDown(Key::Space) => {
                    vx = 0;
                    vy = 0;
                },
                InputEvent::KeyDown(Key::F) => show_fps = !show_fps,
                _ => {},
            }
        }

        let w = canvas.width() as i32;
        let h = canvas.height() as i32;
        ball_x += vx;
        ball_y += vy;
        if ball_x < 0 {
            ball_x = 0;
            vx = vx.abs();
        }
        if ball_x + size > w {
            ball_x = w - size;
            vx = -vx.abs();
        }
        if ball_y < 0 {
            ball_y = 0;
            vy = vy.abs();
        }
        if ball_y + size > h {
            ball_y = h - size;
            vy = -vy.abs();
        }

        draw_backdrop(&mut canvas);
        ball.draw(&mut canvas, ball_x, ball_y);
        canvas.update_display();
        display.present(&mut target, &canvas)?;

        let (_dt, _current_fps, avg_fps) = fps_counter.tick();
        frame += 1;
        if show_fps && frame % 60 == 0 {
            println!(
                "fps: {:.1} ({:.2} ms/frame)",
                avg_fps,
                fps_counter.avg_frame_time_ms()
            );
        }
    }

    Ok(())
}
