/// Circular right rotation of a 32-bit word.
#[inline(always)]
pub const fn rotr32(x: u32, n: u32) -> u32 {
  x.rotate_right(n)
}

#[cfg(test)]
mod tests {
  use super::rotr32;

  #[test]
  fn rotation_wraps_low_bits_to_top() {
    assert_eq!(rotr32(0x0000_0001, 1), 0x8000_0000);
    assert_eq!(rotr32(0x1234_5678, 8), 0x7812_3456);
    assert_eq!(rotr32(0xdead_beef, 0), 0xdead_beef);
    assert_eq!(rotr32(0xdead_beef, 32), 0xdead_beef);
  }
}
