// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Pup Squad: a totally-not-Paw-Patrol platformer for kids.

mod app;
mod config;
mod input;
mod render;

use std::path::Path;

use anyhow::Result;
use env_logger::{Builder, Env};

use app::App;
use config::{Config, CONFIG_FILE};

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("info"))
        .filter_module("wgpu_hal", log::LevelFilter::Error)
        .init();

    let config = Config::load(Path::new(CONFIG_FILE))?;
    App::run(config)
}
