use std::io::Write;

use anyhow::Result;
use tandem_core::profile::{Profile, ProfileUpdate};

use super::user_error;
use crate::app::App;

fn write_profile(out: &mut impl Write, profile: &Profile) -> Result<()> {
    let name = if profile.name.is_empty() { "(no name)" } else { profile.name.as_str() };
    writeln!(out, "{} [{}]", name, profile.initials())?;
    if !profile.email.is_empty() {
        writeln!(out, "  Email:        {}", profile.email)?;
    }
    writeln!(out, "  Native:       {}", profile.native_language)?;

    let learning: Vec<String> = profile
        .learning()
        .map(|(language, level)| match level {
            Some(level) => format!("{} - {}", language, level),
            None => language.to_string(),
        })
        .collect();
    writeln!(out, "  Learning:     {}", learning.join(", "))?;
    writeln!(out, "  Availability: {}", profile.availability)?;
    writeln!(out, "  Interests:    {}", profile.interests)?;
    writeln!(out, "  Bio:          {}", profile.bio)?;
    Ok(())
}

pub fn show(app: &App, out: &mut impl Write) -> Result<()> {
    let profile = app.profile().load()?;
    write_profile(out, &profile)
}

/// Saves the given fields and prints the updated profile. With nothing to
/// change the profile is only shown.
pub fn edit(app: &App, update: ProfileUpdate, out: &mut impl Write) -> Result<()> {
    if update.is_empty() {
        return show(app, out);
    }

    let profile = app.profile().update(update).map_err(user_error)?;
    writeln!(out, "Profile updated. Your profile has been successfully updated.")?;
    write_profile(out, &profile)
}
