use business::domain::screen::model::ScreenState;

/// Text lines shown for a screen state.
pub fn render(state: &ScreenState) -> Vec<String> {
    match state {
        ScreenState::Loading => vec!["Loading...".to_string()],
        ScreenState::Loaded { detail, image } => {
            let mut lines = vec![
                format!("id:  {}", detail.id),
                format!("Product Name: {}", detail.name),
                format!("Price: {}", detail.price),
                format!("Amount: {}", detail.amount),
                format!("Image url: {}", detail.image),
            ];
            if let Some(image) = image {
                lines.push(format!("Image: {}x{}", image.width(), image.height()));
            }
            lines
        }
    }
}
