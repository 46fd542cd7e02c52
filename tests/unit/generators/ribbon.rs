//! Tests for the tape strip layers

#[cfg(test)]
mod tests {
    use placeholder_graphics::generators::ribbon::{line_alpha, tape};
    use placeholder_graphics::io::configuration::{TAPE_HEIGHT, TAPE_WIDTH};
    use placeholder_graphics::render::palette::{GOLD, LIGHT_GOLD};

    // Tests texture lines alternate between the strong and weak alpha
    // Verified by testing against the line spacing instead of twice it
    #[test]
    fn test_line_alpha_alternates() {
        assert_eq!(line_alpha(0), 40);
        assert_eq!(line_alpha(20), 20);
        assert_eq!(line_alpha(40), 40);
        assert_eq!(line_alpha(1060), 20);
    }

    // Tests borders are opaque gold four rows deep at both edges
    // Verified by drawing the borders before the body
    #[test]
    fn test_tape_borders() {
        let canvas = tape();
        assert_eq!(canvas.dimensions(), (TAPE_WIDTH, TAPE_HEIGHT));
        let solid = [GOLD[0], GOLD[1], GOLD[2], 255];
        for y in [0, 3, TAPE_HEIGHT - 3, TAPE_HEIGHT - 1] {
            assert_eq!(canvas.get_pixel(10, y).0, solid, "row {y} should be border");
        }
        assert_ne!(canvas.get_pixel(10, 4).0, solid);
    }

    // Tests the body is translucent light gold between lines
    // Verified by filling the body opaque
    #[test]
    fn test_tape_body() {
        let canvas = tape();
        let body = canvas.get_pixel(10, 60).0;
        assert_eq!(body, [LIGHT_GOLD[0], LIGHT_GOLD[1], LIGHT_GOLD[2], 200]);
    }

    // Tests texture lines darken the body and strong lines more than weak ones
    // Verified by swapping the strong and weak alpha
    #[test]
    fn test_tape_texture_lines() {
        let canvas = tape();
        let body = canvas.get_pixel(10, 60).0;
        let weak = canvas.get_pixel(20, 60).0;
        let strong = canvas.get_pixel(40, 60).0;
        assert!(weak[3] > body[3]);
        assert!(strong[3] > weak[3]);
        assert!(strong[0] < weak[0] && weak[0] < body[0]);
        assert_eq!(canvas, tape());
    }
}
