#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub position: &'static str,
    pub company: &'static str,
    pub image: &'static str,
    pub quote: &'static str,
}

pub static TESTIMONIALS: [Testimonial; 5] = [
    Testimonial {
        id: 1,
        name: "Sarah Johnson",
        position: "CTO",
        company: "TechStart Inc.",
        image: "/placeholder.svg",
        quote: "Working with this developer was a game-changer for our company. Their technical expertise and problem-solving skills helped us launch our platform ahead of schedule. They have a unique ability to translate complex business requirements into elegant technical solutions.",
    },
    Testimonial {
        id: 2,
        name: "Michael Chen",
        position: "Product Manager",
        company: "InnovateSoft",
        image: "/placeholder.svg",
        quote: "I've worked with many developers over my 15-year career, but few have impressed me as much. Their attention to detail, clean code, and commitment to best practices made our collaboration exceptionally smooth. They don't just write code; they craft solutions that address the root of business problems.",
    },
    Testimonial {
        id: 3,
        name: "Emily Rodriguez",
        position: "CEO",
        company: "DigitalEdge",
        image: "/placeholder.svg",
        quote: "An exceptional talent who delivered beyond our expectations. They took the time to understand our business goals and created a solution that perfectly aligned with our vision. Their communication skills and transparency throughout the project made them a joy to work with.",
    },
    Testimonial {
        id: 4,
        name: "David Kim",
        position: "Lead Designer",
        company: "CreativeWorks",
        image: "/placeholder.svg",
        quote: "As a designer, I appreciate developers who can bring my designs to life exactly as envisioned. Their frontend skills are top-notch, and they have a great eye for detail. They suggested improvements that enhanced the user experience while maintaining the design integrity.",
    },
    Testimonial {
        id: 5,
        name: "Alexandra Peters",
        position: "Project Manager",
        company: "GlobalTech Solutions",
        image: "/placeholder.svg",
        quote: "Reliable, professional, and incredibly skilled. They consistently delivered high-quality work on time and within budget. Their ability to adapt to changing requirements and solve complex technical challenges made our project a success.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Back,
    #[default]
    Forward,
}

/// Index into a fixed-length list that wraps in both directions and
/// remembers which way it last moved (for the slide animation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    len: usize,
    direction: Direction,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            current: 0,
            len,
            direction: Direction::default(),
        }
    }

    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.direction = Direction::Forward;
            self.current = (self.current + 1) % self.len;
        }
        self.current
    }

    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.direction = Direction::Back;
            self.current = (self.current + self.len - 1) % self.len;
        }
        self.current
    }

    /// Jumps to `index`; out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) -> usize {
        if index < self.len {
            self.direction = if index > self.current {
                Direction::Forward
            } else {
                Direction::Back
            };
            self.current = index;
        }
        self.current
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps() {
        let mut c = Carousel::new(TESTIMONIALS.len());
        for expected in [1, 2, 3, 4, 0, 1] {
            assert_eq!(c.next(), expected);
        }
        assert_eq!(c.direction(), Direction::Forward);
    }

    #[test]
    fn test_prev_wraps() {
        let mut c = Carousel::new(5);
        assert_eq!(c.prev(), 4);
        assert_eq!(c.prev(), 3);
        assert_eq!(c.direction(), Direction::Back);
    }

    #[test]
    fn test_go_to_sets_direction() {
        let mut c = Carousel::new(5);
        assert_eq!(c.go_to(3), 3);
        assert_eq!(c.direction(), Direction::Forward);
        assert_eq!(c.go_to(1), 1);
        assert_eq!(c.direction(), Direction::Back);
        // same index counts as moving back, out of range is ignored
        assert_eq!(c.go_to(1), 1);
        assert_eq!(c.direction(), Direction::Back);
        assert_eq!(c.go_to(9), 1);
    }

    #[test]
    fn test_empty_carousel() {
        let mut c = Carousel::new(0);
        assert_eq!(c.next(), 0);
        assert_eq!(c.prev(), 0);
        assert_eq!(c.go_to(0), 0);
    }
}
