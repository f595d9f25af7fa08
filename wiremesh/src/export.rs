//! Wavefront OBJ export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::bundle::MeshBundle;

/// Write a mesh bundle to a Wavefront OBJ file
///
/// # Arguments
/// * `bundle` - Mesh to export
/// * `path` - Output file path
/// * `name` - Object name for the `o` header line
pub fn write_obj(bundle: &MeshBundle, path: &Path, name: &str) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_obj_to(bundle, &mut writer, name)?;
    writer.flush()
}

/// Write a mesh bundle as Wavefront OBJ text to any writer
///
/// Emits `v` lines (with the RGB vertex-color extension when the bundle
/// carries colors), `vt`/`vn` lines for the attributes present, 1-based
/// `f` triangles in the matching slash form, and one `l` line per
/// wireframe edge. Attribute buffers are parallel, so a single index
/// serves the position, UV, and normal slots of a face vertex.
pub fn write_obj_to<W: Write>(bundle: &MeshBundle, writer: &mut W, name: &str) -> io::Result<()> {
    let has_uvs = !bundle.uvs.is_empty();
    let has_normals = !bundle.normals.is_empty();
    let has_colors = !bundle.colors.is_empty();

    writeln!(writer, "o {}", name)?;

    for (i, p) in bundle.positions.chunks_exact(3).enumerate() {
        if has_colors {
            let c = &bundle.colors[i * 3..i * 3 + 3];
            writeln!(
                writer,
                "v {} {} {} {} {} {}",
                p[0], p[1], p[2], c[0], c[1], c[2]
            )?;
        } else {
            writeln!(writer, "v {} {} {}", p[0], p[1], p[2])?;
        }
    }

    for uv in bundle.uvs.chunks_exact(2) {
        writeln!(writer, "vt {} {}", uv[0], uv[1])?;
    }

    for n in bundle.normals.chunks_exact(3) {
        writeln!(writer, "vn {} {} {}", n[0], n[1], n[2])?;
    }

    // OBJ face references are 1-based: "v", "v/vt", "v//vn", or "v/vt/vn"
    for tri in bundle.indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] + 1, tri[1] + 1, tri[2] + 1);
        match (has_uvs, has_normals) {
            (true, true) => writeln!(
                writer,
                "f {}/{}/{} {}/{}/{} {}/{}/{}",
                a, a, a, b, b, b, c, c, c
            )?,
            (false, true) => writeln!(writer, "f {}//{} {}//{} {}//{}", a, a, b, b, c, c)?,
            (true, false) => writeln!(writer, "f {}/{} {}/{} {}/{}", a, a, b, b, c, c)?,
            (false, false) => writeln!(writer, "f {} {} {}", a, b, c)?,
        }
    }

    for edge in bundle.wire_indices.chunks_exact(2) {
        writeln!(writer, "l {} {}", edge[0] + 1, edge[1] + 1)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{generate_cube, generate_torus};

    fn obj_string(bundle: &MeshBundle, name: &str) -> String {
        let mut buffer = Vec::new();
        write_obj_to(bundle, &mut buffer, name).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_cube_obj_layout() {
        let bundle = generate_cube(2.0, 1.0, 1.0);
        let text = obj_string(&bundle, "cube");

        assert!(text.starts_with("o cube\n"));
        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 24);
        assert_eq!(text.lines().filter(|l| l.starts_with("vt ")).count(), 24);
        assert_eq!(text.lines().filter(|l| l.starts_with("vn ")).count(), 24);
        assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 12);
        assert_eq!(text.lines().filter(|l| l.starts_with("l ")).count(), 12);
    }

    #[test]
    fn test_cube_obj_vertex_colors_and_faces() {
        let bundle = generate_cube(2.0, 1.0, 1.0);
        let text = obj_string(&bundle, "cube");

        // First corner (1,1,1) carries its octant color appended to the v line
        let first_v = text.lines().find(|l| l.starts_with("v ")).unwrap();
        assert_eq!(first_v, "v 1 1 1 1 1 1");

        // First triangle [0, 2, 1] in 1-based v/vt/vn form
        let first_f = text.lines().find(|l| l.starts_with("f ")).unwrap();
        assert_eq!(first_f, "f 1/1/1 3/3/3 2/2/2");

        // First wireframe edge (8, 9) in 1-based form
        let first_l = text.lines().find(|l| l.starts_with("l ")).unwrap();
        assert_eq!(first_l, "l 9 10");
    }

    #[test]
    fn test_torus_obj_skips_uv_slots() {
        let bundle = generate_torus(1.5, 0.45, 4, 4).unwrap();
        let text = obj_string(&bundle, "torus");

        assert_eq!(text.lines().filter(|l| l.starts_with("vt ")).count(), 0);
        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 25);
        assert_eq!(text.lines().filter(|l| l.starts_with("l ")).count(), 32);

        // Faces use the v//vn form when no UVs are present
        let first_f = text.lines().find(|l| l.starts_with("f ")).unwrap();
        assert_eq!(first_f, "f 1//1 2//2 7//7");
    }
}
