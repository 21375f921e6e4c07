/// ## Turtle graphics
///
/// The turtle only knows where it is and how it draws. Strokes go to a
/// [`Canvas`], which is whatever the front end renders from.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const BACKGROUND: Color = Color(30, 30, 92);
    pub const WHITE: Color = Color(255, 255, 255);

    /// Palette entry by number (`0`..`15`) or name, case-insensitive.
    pub fn named(name: &str) -> Option<Color> {
        let name = name.to_ascii_uppercase();
        PALETTE
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, color)| *color)
    }
}

const PALETTE: &[(&str, Color)] = &[
    ("0", Color(0, 0, 0)),
    ("1", Color(255, 255, 255)),
    ("2", Color(136, 0, 0)),
    ("3", Color(170, 255, 238)),
    ("4", Color(204, 68, 204)),
    ("5", Color(0, 204, 85)),
    ("6", Color(0, 0, 170)),
    ("7", Color(238, 238, 119)),
    ("8", Color(221, 136, 85)),
    ("9", Color(102, 68, 0)),
    ("10", Color(255, 119, 119)),
    ("11", Color(51, 51, 51)),
    ("12", Color(119, 119, 119)),
    ("13", Color(170, 255, 102)),
    ("14", Color(0, 136, 255)),
    ("15", Color(187, 187, 187)),
    ("BLACK", Color(0, 0, 0)),
    ("WHITE", Color(255, 255, 255)),
    ("RED", Color(200, 64, 64)),
    ("GREEN", Color(64, 200, 120)),
    ("BLUE", Color(64, 64, 220)),
    ("YELLOW", Color(240, 220, 92)),
    ("CYAN", Color(100, 220, 220)),
    ("MAGENTA", Color(220, 100, 220)),
];

pub type Point = (f64, f64);

pub trait Canvas {
    fn line(&mut self, from: Point, to: Point, color: Color, thickness: u32);
    fn circle(&mut self, center: Point, radius: i64, color: Color, thickness: u32);
    /// Paint everything with one color.
    fn fill(&mut self, color: Color);
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stroke {
    Line(Point, Point, Color, u32),
    Circle(Point, i64, Color, u32),
}

/// Canvas that records strokes for a renderer to replay.
#[derive(Debug, Clone)]
pub struct DisplayList {
    width: u32,
    height: u32,
    background: Color,
    strokes: Vec<Stroke>,
}

impl DisplayList {
    pub fn new(width: u32, height: u32) -> DisplayList {
        DisplayList {
            width,
            height,
            background: Color::BACKGROUND,
            strokes: vec![],
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn center(&self) -> Point {
        ((self.width / 2) as f64, (self.height / 2) as f64)
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn clear(&mut self) {
        self.background = Color::BACKGROUND;
        self.strokes.clear();
    }

    pub fn replay(&self, canvas: &mut dyn Canvas) {
        canvas.fill(self.background);
        for stroke in &self.strokes {
            match stroke {
                Stroke::Line(from, to, color, thickness) => {
                    canvas.line(*from, *to, *color, *thickness)
                }
                Stroke::Circle(center, radius, color, thickness) => {
                    canvas.circle(*center, *radius, *color, *thickness)
                }
            }
        }
    }
}

impl Canvas for DisplayList {
    fn line(&mut self, from: Point, to: Point, color: Color, thickness: u32) {
        self.strokes.push(Stroke::Line(from, to, color, thickness));
    }
    fn circle(&mut self, center: Point, radius: i64, color: Color, thickness: u32) {
        self.strokes.push(Stroke::Circle(center, radius, color, thickness));
    }
    fn fill(&mut self, color: Color) {
        self.background = color;
        self.strokes.clear();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Turtle {
    pub x: f64,
    pub y: f64,
    /// Degrees in `[0, 360)`. Zero points along +x, turning right is clockwise
    /// on a screen where y grows downward.
    pub heading: f64,
    pub pen_down: bool,
    pub color: Color,
    pub thickness: u32,
}

impl Turtle {
    pub fn new(home: Point) -> Turtle {
        Turtle {
            x: home.0,
            y: home.1,
            heading: 0.0,
            pen_down: true,
            color: Color::WHITE,
            thickness: 2,
        }
    }

    pub fn position(&self) -> Point {
        (self.x, self.y)
    }

    pub fn forward(&mut self, distance: f64, canvas: &mut dyn Canvas) {
        let radians = self.heading.to_radians();
        let to = (
            self.x + radians.cos() * distance,
            self.y + radians.sin() * distance,
        );
        self.move_to(to, canvas);
    }

    pub fn move_to(&mut self, to: Point, canvas: &mut dyn Canvas) {
        if self.pen_down {
            canvas.line(self.position(), to, self.color, self.thickness);
        }
        self.x = to.0;
        self.y = to.1;
    }

    pub fn turn(&mut self, degrees: f64) {
        self.heading = (self.heading + degrees).rem_euclid(360.0);
    }

    pub fn circle(&self, radius: i64, canvas: &mut dyn Canvas) {
        // Whole pixels, as the rasterizer would see them.
        let center = (self.x.trunc(), self.y.trunc());
        canvas.circle(center, radius, self.color, self.thickness.max(1));
    }
}
