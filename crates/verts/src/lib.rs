use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};
use std::path::Path;
use vtm_mesh::Vector3;

// Binary vertex files are a little-endian u32 vertex count followed by
// that many x,y,z f32 triples. Coordinates are meters. The same layout is
// used for joint-position files; joint naming comes from the caller.

fn read_binary<T: Read>(f: &mut T) -> std::io::Result<Vec<Vector3>> {
    let n_verts = f.read_u32::<LittleEndian>()? as usize;

    let mut verts = Vec::<Vector3>::with_capacity(n_verts);
    for _ in 0..n_verts {
        verts.push(Vector3 {
            x: f.read_f32::<LittleEndian>()?,
            y: f.read_f32::<LittleEndian>()?,
            z: f.read_f32::<LittleEndian>()?,
        });
    }
    Ok(verts)
}

fn write_binary<T: Write>(f: &mut T, verts: &[Vector3]) -> std::io::Result<()> {
    f.write_u32::<LittleEndian>(verts.len() as u32)?;
    for v in verts {
        f.write_f32::<LittleEndian>(v.x)?;
        f.write_f32::<LittleEndian>(v.y)?;
        f.write_f32::<LittleEndian>(v.z)?;
    }
    Ok(())
}

pub fn read_verts<P: AsRef<Path>>(p: P) -> std::io::Result<Vec<Vector3>> {
    let mut f = std::fs::File::open(p)?;
    read_binary(&mut f)
}

pub fn parse_verts(data: &[u8]) -> std::io::Result<Vec<Vector3>> {
    let mut c = std::io::Cursor::new(data);
    read_binary(&mut c)
}

/// Writes a vertex set in the binary verts layout. Used by fixture
/// generation and tests; the production meshes come from upstream stages.
pub fn write_verts<P: AsRef<Path>>(p: P, verts: &[Vector3]) -> std::io::Result<()> {
    let mut f = std::fs::File::create(p)?;
    write_binary(&mut f, verts)
}

pub trait VertsReader: Read {
    fn read_verts(&mut self) -> std::io::Result<Vec<Vector3>>;
}

impl<T: Read> VertsReader for T {
    fn read_verts(&mut self) -> std::io::Result<Vec<Vector3>> {
        read_binary(self)
    }
}
