mod configuration;
mod params;
mod progress;
mod svg;
