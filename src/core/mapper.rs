/// Price-to-pixel capability supplied by the host charting engine.
///
/// `None` (or a non-finite value) means the price is outside the currently
/// visible range. Callers must skip such prices instead of clamping them.
pub trait CoordinateMapper {
    fn price_to_pixel_y(&self, price: f64) -> Option<f64>;

    /// Resolves a price to a drawable pixel Y, folding non-finite results into `None`.
    fn resolve_pixel_y(&self, price: f64) -> Option<f64> {
        self.price_to_pixel_y(price).filter(|y| y.is_finite())
    }
}

impl<F> CoordinateMapper for F
where
    F: Fn(f64) -> Option<f64>,
{
    fn price_to_pixel_y(&self, price: f64) -> Option<f64> {
        self(price)
    }
}

#[cfg(test)]
mod tests {
    use super::CoordinateMapper;

    #[test]
    fn closures_act_as_mappers() {
        let mapper = |price: f64| (price >= 0.0).then_some(price * 2.0);
        assert_eq!(mapper.price_to_pixel_y(10.0), Some(20.0));
        assert_eq!(mapper.price_to_pixel_y(-1.0), None);
    }

    #[test]
    fn resolve_filters_nan_pixels() {
        let mapper = |_price: f64| Some(f64::NAN);
        assert_eq!(mapper.resolve_pixel_y(1.0), None);
    }
}
