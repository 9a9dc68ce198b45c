use crate::presenter::MapVm;
use maud::{html, Markup};

/// Mount point for the client-side map. Points travel as JSON in `data-points`.
pub fn map_region(map: &MapVm) -> Markup {
    let points = serde_json::to_string(&map.points).unwrap_or_else(|e| {
        tracing::error!("failed to serialize map points: {e}");
        "[]".to_string()
    });

    html! {
        div
            class="map__canvas"
            id="map"
            data-city=(map.city.name)
            data-latitude=(map.city.location.latitude)
            data-longitude=(map.city.location.longitude)
            data-zoom=(map.city.location.zoom)
            data-selected=(map.selected_id.as_deref().unwrap_or_default())
            data-points=(points)
        {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::default_city;
    use crate::presenter::MapPoint;

    #[test]
    fn carries_city_and_selection() {
        let map = MapVm {
            city: default_city(),
            points: vec![MapPoint {
                id: "5".to_string(),
                latitude: 48.85,
                longitude: 2.29,
            }],
            selected_id: Some("5".to_string()),
        };

        let html = map_region(&map).into_string();

        assert!(html.contains(r#"data-city="Paris""#));
        assert!(html.contains(r#"data-selected="5""#));
        assert!(html.contains("&quot;id&quot;:&quot;5&quot;"));
    }
}
