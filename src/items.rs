use crate::geometry::{Circle, Rect, circle_rect_overlap};
use crate::render::DrawCommand;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    pub const RED: Color = Color::rgba(255, 0, 0, 255);
    pub const GREEN: Color = Color::rgba(0, 255, 0, 255);
    pub const BLUE: Color = Color::rgba(0, 0, 255, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ball {
    pub position: [f32; 2],
    pub velocity: [f32; 2],
    pub radius: f32,
    pub speed: f32,
    pub color: Color,
}

impl Ball {
    /// Creates a ball moving diagonally up-left at `speed` per tick.
    ///
    /// Panics if `radius` or `speed` is not positive.
    pub fn new(position: [f32; 2], radius: f32, speed: f32, color: Option<Color>) -> Ball {
        assert!(radius > 0.0, "ball radius must be positive, got {radius}");
        assert!(speed > 0.0, "ball speed must be positive, got {speed}");
        Ball {
            position,
            velocity: [-speed, -speed],
            radius,
            speed,
            color: color.unwrap_or(Color::RED),
        }
    }

    pub fn shape(&self) -> Circle {
        Circle::new(self.position, self.radius)
    }

    pub fn draw_command(&self) -> DrawCommand {
        DrawCommand::Circle {
            center: self.position,
            radius: self.radius,
            color: self.color,
        }
    }

    /// Advances one tick, then sends the ball back toward the interior on
    /// any axis whose edge ended up outside `[0, arena]`.
    pub fn move_ball(&mut self, arena: [f32; 2]) {
        self.position[0] += self.velocity[0];
        self.position[1] += self.velocity[1];

        let left = self.position[0] - self.radius;
        let right = self.position[0] + self.radius;
        let top = self.position[1] - self.radius;
        let bottom = self.position[1] + self.radius;

        if left < 0.0 {
            self.velocity[0] = self.speed;
        } else if right > arena[0] {
            self.velocity[0] = -self.speed;
        }

        if top < 0.0 {
            self.velocity[1] = self.speed;
        } else if bottom > arena[1] {
            self.velocity[1] = -self.speed;
        }
    }

    /// Always bounces upward; horizontal direction follows which side of the
    /// paddle's left edge the ball center is on (exactly on it goes right).
    pub fn paddle_collision(&mut self, paddle: &Paddle) -> bool {
        if !circle_rect_overlap(&self.shape(), &paddle.rect()) {
            return false;
        }
        self.velocity[1] = -self.speed;
        self.velocity[0] = if self.position[0] < paddle.position[0] {
            -self.speed
        } else {
            self.speed
        };
        true
    }

    /// Destroys a live block on contact and fully reverses the ball.
    pub fn block_collision(&mut self, block: &mut Block) -> bool {
        if !block.alive || !circle_rect_overlap(&self.shape(), &block.rect) {
            return false;
        }
        block.alive = false;
        self.velocity = [-self.velocity[0], -self.velocity[1]];
        true
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Paddle {
    /// Top-left corner
    pub position: [f32; 2],
    pub velocity: [f32; 2],
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub color: Color,
}

impl Paddle {
    /// Panics if any dimension or `speed` is not positive.
    pub fn new(
        position: [f32; 2],
        width: f32,
        height: f32,
        speed: f32,
        color: Option<Color>,
    ) -> Paddle {
        assert!(
            width > 0.0 && height > 0.0,
            "paddle size must be positive, got {width}x{height}"
        );
        assert!(speed > 0.0, "paddle speed must be positive, got {speed}");
        Paddle {
            position,
            velocity: [0.0, 0.0],
            width,
            height,
            speed,
            color: color.unwrap_or(Color::BLUE),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.position[0], self.position[1], self.width, self.height)
    }

    pub fn draw_command(&self) -> DrawCommand {
        DrawCommand::Rect {
            rect: self.rect(),
            color: self.color,
        }
    }

    // Bounds are enforced by the input mapping zeroing the velocity.
    pub fn move_paddle(&mut self) {
        self.position[0] += self.velocity[0];
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub rect: Rect,
    pub alive: bool,
    pub color: Color,
}

impl Block {
    pub fn new(rect: Rect, color: Option<Color>) -> Block {
        Block {
            rect,
            alive: true,
            color: color.unwrap_or(Color::BLUE),
        }
    }

    pub fn draw_command(&self) -> Option<DrawCommand> {
        self.alive.then(|| DrawCommand::Rect {
            rect: self.rect,
            color: self.color,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARENA: [f32; 2] = [800.0, 600.0];

    #[test]
    fn test_ball_moves_diagonally_until_wall() {
        let mut ball = Ball::new([400.0, 300.0], 10.0, 1.0, None);
        for _ in 0..50 {
            ball.move_ball(ARENA);
        }
        assert_eq!(ball.position, [350.0, 250.0]);
        assert_eq!(ball.velocity, [-1.0, -1.0]);
    }

    #[test]
    fn test_ball_reflects_off_top_and_left() {
        let mut ball = Ball::new([20.0, 11.0], 10.0, 3.0, None);
        ball.move_ball(ARENA);
        // top edge is at -2 after the move, left edge is still inside
        assert_eq!(ball.position, [17.0, 8.0]);
        assert_eq!(ball.velocity, [-3.0, 3.0]);

        ball.position = [11.0, 300.0];
        ball.move_ball(ARENA);
        assert_eq!(ball.velocity, [3.0, 3.0]);
    }

    #[test]
    fn test_ball_reflects_off_right_and_bottom() {
        let mut ball = Ball::new([789.0, 589.0], 10.0, 3.0, None);
        ball.velocity = [3.0, 3.0];
        ball.move_ball(ARENA);
        assert_eq!(ball.velocity, [-3.0, -3.0]);
    }

    #[test]
    fn test_ball_touching_wall_is_not_reflected() {
        let mut ball = Ball::new([13.0, 300.0], 10.0, 3.0, None);
        ball.velocity = [-3.0, 3.0];
        ball.move_ball(ARENA);
        // left edge exactly at 0
        assert_eq!(ball.velocity, [-3.0, 3.0]);
    }

    #[test]
    #[should_panic(expected = "ball radius must be positive")]
    fn test_ball_rejects_negative_radius() {
        Ball::new([0.0, 0.0], -1.0, 3.0, None);
    }

    #[test]
    fn test_paddle_collision_bounces_up_and_right() {
        let paddle = Paddle::new([400.0, 550.0], 60.0, 20.0, 5.0, None);
        let mut ball = Ball::new([420.0, 541.0], 10.0, 3.0, None);
        ball.velocity = [-3.0, 3.0];
        assert!(ball.paddle_collision(&paddle));
        assert_eq!(ball.velocity, [3.0, -3.0]);
    }

    #[test]
    fn test_paddle_collision_left_of_edge_bounces_left() {
        let paddle = Paddle::new([400.0, 550.0], 60.0, 20.0, 5.0, None);
        let mut ball = Ball::new([395.0, 541.0], 10.0, 3.0, None);
        ball.velocity = [3.0, 3.0];
        assert!(ball.paddle_collision(&paddle));
        assert_eq!(ball.velocity, [-3.0, -3.0]);
    }

    #[test]
    fn test_paddle_collision_tie_goes_right() {
        let paddle = Paddle::new([400.0, 550.0], 60.0, 20.0, 5.0, None);
        let mut ball = Ball::new([400.0, 545.0], 10.0, 3.0, None);
        assert!(ball.paddle_collision(&paddle));
        assert_eq!(ball.velocity, [3.0, -3.0]);
    }

    #[test]
    fn test_paddle_miss_leaves_velocity() {
        let paddle = Paddle::new([400.0, 550.0], 60.0, 20.0, 5.0, None);
        let mut ball = Ball::new([400.0, 300.0], 10.0, 3.0, None);
        assert!(!ball.paddle_collision(&paddle));
        assert_eq!(ball.velocity, [-3.0, -3.0]);
    }

    #[test]
    fn test_block_collision_on_exact_bounds() {
        let mut block = Block::new(Rect::new(90.0, 90.0, 20.0, 20.0), None);
        let mut ball = Ball::new([100.0, 100.0], 10.0, 3.0, None);
        ball.velocity = [3.0, -3.0];
        assert!(ball.block_collision(&mut block));
        assert!(!block.alive);
        assert_eq!(ball.velocity, [-3.0, 3.0]);

        // dead blocks are inert
        assert!(!ball.block_collision(&mut block));
        assert_eq!(ball.velocity, [-3.0, 3.0]);
        assert_eq!(block.draw_command(), None);
    }

    #[test]
    fn test_paddle_moves_horizontally_only() {
        let mut paddle = Paddle::new([400.0, 550.0], 60.0, 20.0, 5.0, None);
        paddle.velocity = [-5.0, 0.0];
        paddle.move_paddle();
        assert_eq!(paddle.position, [395.0, 550.0]);
    }
}
