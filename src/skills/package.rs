use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use tempfile::NamedTempFile;
use tracing::{debug, info};
use walkdir::WalkDir;

use super::validate::{REFERENCES_DIR, SKILL_MD};
use crate::error::{Result, SkillError};

pub const ARCHIVE_EXTENSION: &str = "skill";

/// Package a skill directory into `<output_dir>/<skill_name>.skill`.
///
/// The archive holds SKILL.md at its root plus every regular file under
/// `references/`, stored by its path relative to the skill directory.
/// It is written to a temporary file next to the target and renamed into
/// place once complete, replacing any earlier archive.
pub fn package_skill(skill_dir: &Path, output_dir: &Path) -> Result<PathBuf> {
    let skill_dir = std::path::absolute(skill_dir)?;
    let output_dir = std::path::absolute(output_dir)?;
    let skill_name = skill_name(&skill_dir)?;

    let skill_md = skill_dir.join(SKILL_MD);
    if !skill_md.is_file() {
        return Err(SkillError::MissingSkillMd { dir: skill_dir });
    }

    fs::create_dir_all(&output_dir)?;
    let output_file = output_dir.join(format!("{}.{}", skill_name, ARCHIVE_EXTENSION));
    info!(skill = %skill_name, output = %output_file.display(), "packaging skill");

    let members = reference_files(&skill_dir).map_err(SkillError::archive(&output_file))?;
    write_archive(&skill_dir, &members, &output_file)
        .map_err(SkillError::archive(&output_file))?;

    Ok(output_file)
}

fn skill_name(skill_dir: &Path) -> Result<String> {
    let name = match skill_dir.file_name() {
        Some(name) => name.to_os_string(),
        // e.g. a path ending in `..`
        None => fs::canonicalize(skill_dir)?
            .file_name()
            .map(|n| n.to_os_string())
            .ok_or_else(|| SkillError::NotADirectory(skill_dir.to_path_buf()))?,
    };
    Ok(name.to_string_lossy().into_owned())
}

/// Regular files under `references/`, relative to the skill root, in
/// file-name order. Directories are implied by their files' paths.
fn reference_files(skill_dir: &Path) -> io::Result<Vec<PathBuf>> {
    let refs_dir = skill_dir.join(REFERENCES_DIR);
    if !refs_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(&refs_dir).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.path().is_file() {
            continue;
        }
        if let Ok(rel) = entry.path().strip_prefix(skill_dir) {
            files.push(rel.to_path_buf());
        }
    }
    Ok(files)
}

fn write_archive(skill_dir: &Path, members: &[PathBuf], output_file: &Path) -> io::Result<()> {
    let dir = output_file.parent().unwrap_or(Path::new("."));
    let tmp = new_temp_file(dir)?;

    let mut builder = tar::Builder::new(GzEncoder::new(tmp, Compression::default()));
    builder.append_path_with_name(skill_dir.join(SKILL_MD), SKILL_MD)?;
    for rel in members {
        debug!(member = %rel.display(), "adding archive member");
        builder.append_path_with_name(skill_dir.join(rel), rel)?;
    }

    let tmp = builder.into_inner()?.finish()?;
    tmp.as_file().sync_all()?;
    tmp.persist(output_file).map_err(|e| e.error)?;
    Ok(())
}

/// Temp file created with the mode a plain `File::create` would get, so the
/// process umask applies to the finished archive.
#[cfg(unix)]
fn new_temp_file(dir: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    tempfile::Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn new_temp_file(dir: &Path) -> io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}

/// Member paths of a packaged archive, in archive order.
pub fn archive_members(archive: &Path) -> Result<Vec<String>> {
    let file = File::open(archive)?;
    let mut archive = tar::Archive::new(GzDecoder::new(file));

    let mut members = Vec::new();
    for entry in archive.entries()? {
        let entry = entry?;
        members.push(entry.path()?.to_string_lossy().into_owned());
    }
    Ok(members)
}

/// Byte count with thousands separators, e.g. `12,345`.
pub fn format_size(bytes: u64) -> String {
    let digits = bytes.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
