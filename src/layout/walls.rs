// walls.rs - Partitioning images across the four walls
//
// Contiguous slices of the input in fixed priority order; the
// remainder goes to the earlier walls, so west never holds more than
// the base share. Order within a wall is the input order.

/// The four wall slots, in distribution priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wall {
    North,
    East,
    South,
    West,
}

impl Wall {
    pub const ALL: [Wall; 4] = [Wall::North, Wall::East, Wall::South, Wall::West];

    /// Stable index used in the encoded output buffer.
    pub fn index(self) -> usize {
        match self {
            Wall::North => 0,
            Wall::East => 1,
            Wall::South => 2,
            Wall::West => 3,
        }
    }
}

/// Ordered slices of the input list, one per wall. Together they
/// cover the input exactly once.
pub struct WallAssignment<'a, T> {
    pub north: &'a [T],
    pub east: &'a [T],
    pub south: &'a [T],
    pub west: &'a [T],
}

impl<'a, T> WallAssignment<'a, T> {
    pub fn get(&self, wall: Wall) -> &'a [T] {
        match wall {
            Wall::North => self.north,
            Wall::East => self.east,
            Wall::South => self.south,
            Wall::West => self.west,
        }
    }

    /// Walls with their slices, in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (Wall, &'a [T])> + '_ {
        Wall::ALL.into_iter().map(|wall| (wall, self.get(wall)))
    }
}

/// Split the image list across the four walls.
///
/// Each wall gets `len / 4`; the first `len % 4` walls in priority
/// order get one more.
pub fn distribute<T>(items: &[T]) -> WallAssignment<'_, T> {
    let base = items.len() / 4;
    let remainder = items.len() % 4;

    let north_count = base + usize::from(remainder > 0);
    let east_count = base + usize::from(remainder > 1);
    let south_count = base + usize::from(remainder > 2);

    let (north, rest) = items.split_at(north_count);
    let (east, rest) = rest.split_at(east_count);
    let (south, west) = rest.split_at(south_count);

    WallAssignment { north, east, south, west }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_four_empty_walls() {
        let assignment = distribute::<u32>(&[]);
        for (_, group) in assignment.iter() {
            assert!(group.is_empty());
        }
    }

    #[test]
    fn ten_images_split_three_three_two_two() {
        let items: Vec<u32> = (0..10).collect();
        let assignment = distribute(&items);

        assert_eq!(assignment.north, &[0, 1, 2]);
        assert_eq!(assignment.east, &[3, 4, 5]);
        assert_eq!(assignment.south, &[6, 7]);
        assert_eq!(assignment.west, &[8, 9]);
    }

    #[test]
    fn concatenation_reconstructs_input() {
        for len in 0..13usize {
            let items: Vec<usize> = (0..len).collect();
            let assignment = distribute(&items);

            let joined: Vec<usize> = assignment
                .iter()
                .flat_map(|(_, group)| group.iter().copied())
                .collect();
            assert_eq!(joined, items, "len {len}");
        }
    }

    #[test]
    fn west_never_takes_the_remainder() {
        for len in 0..32usize {
            let items: Vec<usize> = (0..len).collect();
            let assignment = distribute(&items);
            assert_eq!(assignment.west.len(), len / 4, "len {len}");
        }
    }
}
