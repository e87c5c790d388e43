use std::error;
use std::fs::File;
use std::io::BufReader;

use bevy_reflect::{Reflect, Struct};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ModeColors {
    pub text: String,
    pub background: String,
}

/// Fixed text/background pairs the generated tints sit against.
#[derive(Debug, Clone, Deserialize)]
pub struct Palette {
    pub light: ModeColors,
    pub dark: ModeColors,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            light: ModeColors {
                text: String::from("#000000"),
                background: String::from("#ffffff"),
            },
            dark: ModeColors {
                text: String::from("#ffffff"),
                background: String::from("#1f1f21"),
            },
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Reflect)]
pub struct Surface {
    fill_alpha: Option<f32>,
    outline: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Reflect)]
pub struct Surfaces {
    fill_alpha: Option<f32>,
    card: Option<Surface>,
    avatar: Option<Surface>,
    badge: Option<Surface>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub palette: Palette,
    #[serde(default)]
    pub surfaces: Surfaces,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            surfaces: Surfaces {
                fill_alpha: None,
                card: Some(Surface {
                    fill_alpha: Some(0.5),
                    outline: Some(true),
                }),
                avatar: Some(Surface::default()),
                badge: Some(Surface::default()),
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct SurfaceConfig {
    pub key: String,
    pub fill_alpha: f32,
    pub outline: bool,
}

pub fn load(name: &str) -> Result<Theme, Box<dyn error::Error>> {
    let filepath = format!("res/themes/{}.yaml", name);
    let theme: Theme = load_yaml(&filepath)?;

    Ok(theme)
}

fn load_yaml<T>(filename: &str) -> Result<T, Box<dyn error::Error>>
where
    T: serde::de::DeserializeOwned,
{
    let file = File::open(filename)?;
    let reader = BufReader::new(file);
    let result: T = serde_yaml::from_reader(reader)?;
    Ok(result)
}

pub fn get_surface_list(theme: &Theme) -> Vec<SurfaceConfig> {
    // Solid fill unless the theme says otherwise.
    let mut alpha = 1.0;

    // If surfaces specify a shared fill alpha, use it.
    if let Some(val) = theme.surfaces.fill_alpha {
        alpha = val;
    }

    let mut res = Vec::<SurfaceConfig>::new();

    for (i, surface) in theme.surfaces.iter_fields().enumerate() {
        let mut surface_alpha = alpha;
        let name = theme.surfaces.name_at(i).unwrap().to_string();
        if let Some(Some(field)) = surface.downcast_ref::<Option<Surface>>() {
            // If a surface specifies a local fill alpha, use it.
            if let Some(val) = field.fill_alpha {
                surface_alpha = val;
            }

            res.push(SurfaceConfig {
                key: name,
                fill_alpha: surface_alpha,
                outline: field.outline.unwrap_or(false),
            });
        }
    }

    res
}
