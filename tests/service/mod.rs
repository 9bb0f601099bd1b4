mod planetary;
