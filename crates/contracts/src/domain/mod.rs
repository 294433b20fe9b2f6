pub mod a001_leaf_diagnosis;
