use std::time::Instant;

use bounce_physics::game::prompt::{self, INVALID_INPUT_MESSAGE};
use bounce_physics::game::BallChoices;
use bounce_physics::{FrameInput, RigidBody, Session, SessionConfig, SessionState, Shape, Vec2};
use ggez::event::EventHandler;
use ggez::graphics::{Canvas, Color, DrawMode, DrawParam, Mesh, Text};
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::{mint, Context, GameResult};
use log::warn;

use crate::pacing::FramePacer;

const SEGMENT_COLOR: Color = Color::new(0.8, 0.8, 0.8, 1.0);
const COUNTDOWN_POSITION: mint::Point2<f32> = mint::Point2 { x: 200.0, y: 250.0 };

enum Phase {
    /// Message on screen, no bodies yet, nothing stepping.
    Countdown { started: Instant, choices: BallChoices },
    Running(Session),
    /// Setup was rejected; waiting for the window to close.
    Aborted,
}

pub struct MainState {
    config: SessionConfig,
    phase: Phase,
    pending_launch: bool,
    pacer: FramePacer,
}

impl MainState {
    pub fn new(config: SessionConfig, choices: BallChoices) -> Self {
        let pacer = FramePacer::new(config.target_fps);
        Self {
            config,
            phase: Phase::Countdown { started: Instant::now(), choices },
            pending_launch: false,
            pacer,
        }
    }

    fn begin_session(&self, ctx: &mut Context, choices: &BallChoices) -> Phase {
        match Session::start(self.config.clone(), choices) {
            Ok(session) => Phase::Running(session),
            Err(e) => {
                warn!("{}", e);
                println!("{INVALID_INPUT_MESSAGE}");
                ctx.request_quit();
                Phase::Aborted
            }
        }
    }

    fn poll_input(&mut self, ctx: &Context) -> FrameInput {
        FrameInput {
            launch: std::mem::take(&mut self.pending_launch),
            rotate_left: ctx.keyboard.is_key_pressed(KeyCode::Left),
            rotate_right: ctx.keyboard.is_key_pressed(KeyCode::Right),
            close_requested: false,
        }
    }
}

fn point(v: Vec2) -> mint::Point2<f32> {
    mint::Point2 { x: v.x as f32, y: v.y as f32 }
}

fn ball_color(session: &Session, handle: usize) -> Color {
    session
        .balls()
        .iter()
        .find(|ball| ball.handle == handle)
        .and_then(|ball| ball.material.properties())
        .map_or(Color::WHITE, |p| Color::from_rgb(p.color[0], p.color[1], p.color[2]))
}

/// Draws one body in its current pose: filled discs with a spoke showing spin, thick lines for segments.
fn draw_body(ctx: &mut Context, canvas: &mut Canvas, body: &RigidBody, color: Color) -> GameResult {
    match &body.shape {
        Shape::Circle(circle) => {
            let center = point(body.position);
            let disc = Mesh::new_circle(ctx, DrawMode::fill(), center, circle.radius as f32, 0.5, color)?;
            canvas.draw(&disc, DrawParam::default());

            let rim = point(body.to_world(Vec2::new(circle.radius, 0.0)));
            let spoke = Mesh::new_line(ctx, &[center, rim], 1.0, Color::WHITE)?;
            canvas.draw(&spoke, DrawParam::default());
        }
        Shape::Segment(segment) => {
            if let Some((a, b)) = body.world_segment() {
                let width = (segment.radius * 2.0).max(1.0) as f32;
                let line = Mesh::new_line(ctx, &[point(a), point(b)], width, color)?;
                canvas.draw(&line, DrawParam::default());
            }
        }
    }
    Ok(())
}

fn outcome_message(state: SessionState) -> Option<&'static str> {
    match state {
        SessionState::Stopped(termination) => prompt::termination_message(termination),
        SessionState::Running => None,
    }
}

impl EventHandler for MainState {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        if let Phase::Countdown { started, choices } = self.phase {
            if started.elapsed() >= self.config.countdown {
                self.phase = self.begin_session(ctx, &choices);
            }
            return Ok(());
        }

        let input = self.poll_input(ctx);
        if let Phase::Running(session) = &mut self.phase {
            session.apply_input(&input);
            session.step();
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = Canvas::from_frame(ctx, Color::BLACK);

        match &self.phase {
            Phase::Countdown { .. } => {
                let message = format!("Game Starting in {} seconds...", self.config.countdown.as_secs());
                let mut text = Text::new(message);
                text.set_scale(50.0);
                canvas.draw(&text, DrawParam::default().dest(COUNTDOWN_POSITION).color(Color::WHITE));
            }
            Phase::Running(session) => {
                for (handle, body) in session.world().bodies.iter().enumerate() {
                    let color = match body.shape {
                        Shape::Circle(_) => ball_color(session, handle),
                        Shape::Segment(_) => SEGMENT_COLOR,
                    };
                    draw_body(ctx, &mut canvas, body, color)?;
                }
            }
            Phase::Aborted => {}
        }

        canvas.finish(ctx)?;
        self.pacer.tick();

        if let Phase::Running(session) = &mut self.phase {
            if session.check_game_over() {
                if let Some(message) = outcome_message(session.state()) {
                    println!("{message}");
                }
                ctx.request_quit();
            }
        }
        Ok(())
    }

    fn key_down_event(&mut self, _ctx: &mut Context, input: KeyInput, repeated: bool) -> GameResult {
        if !repeated && input.keycode == Some(KeyCode::Space) && matches!(self.phase, Phase::Running(_)) {
            self.pending_launch = true;
        }
        Ok(())
    }

    fn quit_event(&mut self, _ctx: &mut Context) -> Result<bool, ggez::GameError> {
        if let Phase::Running(session) = &mut self.phase {
            session.apply_input(&FrameInput { close_requested: true, ..Default::default() });
        }
        // Never veto: closing the window always ends the session
        Ok(false)
    }
}
