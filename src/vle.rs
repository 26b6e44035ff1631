pub(crate) mod lzy_sequence;

pub(crate) trait VariableLengthEncoding: Sized {
    type Point;
    type Codepoint;

    fn build(input: Self::Point) -> Option<Self>;
    fn add_point(&mut self, point: Self::Point) -> bool;
    fn get_codepoint(&self) -> Self::Codepoint;
    fn is_valid(&self) -> bool;
}
